use std::cell::RefCell;
use std::rc::Rc;

use folio_engine::radar::points_attr;
use folio_engine::{
    ChartFrame, RadarChart, RadarDomain, RadarLayout, Target, TooltipAnchor, TooltipEvent,
};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::dom;

const ACTIVE_LABEL: &str = "radar__label--active";
const VISIBLE_TOOLTIP: &str = "radar__tooltip--visible";

/// DOM handles for a mounted radar.
struct RadarView {
    chart: RefCell<RadarChart>,
    root: Element,
    wrapper: Element,
    area: Element,
    tooltip: HtmlElement,
    tooltip_name: Element,
    tooltip_level: Element,
    tooltip_skills: Element,
    dots: Vec<Element>,
    labels: Vec<HtmlElement>,
}

/// Mount the skill radar on `.radar`. Returns false if the markup is absent or incomplete.
pub fn mount(document: &Document) -> Result<bool, JsValue> {
    let Some(root) = document.query_selector(".radar")? else {
        return Ok(false);
    };

    let find = |selector: &str| root.query_selector(selector);
    let (Some(grid), Some(axes), Some(dots_group), Some(labels_box), Some(area), Some(wrapper)) = (
        find(".radar__grid")?,
        find(".radar__axes")?,
        find(".radar__dots")?,
        find(".radar__labels")?,
        find(".radar__area")?,
        find(".radar__chart-wrapper")?,
    ) else {
        log::warn!("radar: chart markup incomplete, skipping");
        return Ok(false);
    };
    let (Some(tooltip), Some(tooltip_name), Some(tooltip_level), Some(tooltip_skills)) = (
        dom::query_html(&root, ".radar__tooltip")?,
        find(".radar__tooltip-name")?,
        find(".radar__tooltip-level")?,
        find(".radar__tooltip-skills")?,
    ) else {
        log::warn!("radar: tooltip markup incomplete, skipping");
        return Ok(false);
    };

    let chart = RadarChart::new(RadarLayout::default(), load_domains(&root));

    for ring in chart.grid_rings() {
        dom::append_svg(document, &grid, "polygon", &[("points", points_attr(&ring))])?;
    }
    for (from, to) in chart.spokes() {
        dom::append_svg(
            document,
            &axes,
            "line",
            &[
                ("x1", fmt(from.x)),
                ("y1", fmt(from.y)),
                ("x2", fmt(to.x)),
                ("y2", fmt(to.y)),
            ],
        )?;
    }

    let center = chart.layout().center;
    let mut dots = Vec::with_capacity(chart.len());
    for i in 0..chart.len() {
        dots.push(dom::append_svg(
            document,
            &dots_group,
            "circle",
            &[
                ("cx", fmt(center.x)),
                ("cy", fmt(center.y)),
                ("r", fmt(chart.layout().dot_radius)),
                ("data-index", i.to_string()),
            ],
        )?);
    }

    let mut labels = Vec::with_capacity(chart.len());
    for (i, (placement, domain)) in chart.labels().iter().zip(chart.domains()).enumerate() {
        let label: HtmlElement = document.create_element("div")?.dyn_into().map_err(JsValue::from)?;
        label.set_class_name("radar__label");
        label.set_text_content(Some(&domain.name));
        label.set_attribute("data-index", &i.to_string())?;
        dom::set_style(&label, "left", &format!("{}%", placement.left_pct))?;
        dom::set_style(&label, "top", &format!("{}%", placement.top_pct))?;
        dom::set_style(&label, "transform", placement.anchor.transform())?;
        if let Some(align) = placement.anchor.text_align() {
            dom::set_style(&label, "text-align", align)?;
        }
        labels_box.append_child(&label)?;
        labels.push(label);
    }

    // Collapsed onto the centre until revealed.
    area.set_attribute("points", &points_attr(chart.area()))?;

    let threshold = chart.layout().reveal_threshold;
    let view = Rc::new(RadarView {
        chart: RefCell::new(chart),
        root: root.clone(),
        wrapper,
        area,
        tooltip,
        tooltip_name,
        tooltip_level,
        tooltip_skills,
        dots,
        labels,
    });

    {
        let view = view.clone();
        dom::observe_once(&root, threshold, None, move |fraction| {
            let revealed = view.chart.borrow_mut().observe(fraction);
            if revealed {
                if let Err(err) = view.show_targets() {
                    log::warn!("radar: reveal failed: {:?}", err);
                }
            }
            view.chart.borrow().is_revealed()
        })?;
    }

    for (i, label) in view.labels.iter().enumerate() {
        listen(&view, label, "mouseenter", TooltipEvent::Enter(Target::Label(i)), false)?;
        listen(&view, label, "mouseleave", TooltipEvent::Leave(Target::Label(i)), false)?;
        listen(&view, label, "click", TooltipEvent::Click(Target::Label(i)), true)?;
    }
    for (i, dot) in view.dots.iter().enumerate() {
        listen(&view, dot, "mouseenter", TooltipEvent::Enter(Target::Dot(i)), false)?;
        listen(&view, dot, "mouseleave", TooltipEvent::Leave(Target::Dot(i)), false)?;
        listen(&view, dot, "click", TooltipEvent::Click(Target::Dot(i)), true)?;
    }
    listen(&view, document, "click", TooltipEvent::ClickOutside, false)?;

    log::info!("radar: {} domains", view.chart.borrow().len());
    Ok(true)
}

fn load_domains(root: &Element) -> Vec<RadarDomain> {
    match root.get_attribute("data-domains") {
        Some(json) => RadarDomain::list_from_json(&json).unwrap_or_else(|err| {
            log::warn!("radar: invalid data-domains ({}), using built-in list", err);
            RadarDomain::portfolio()
        }),
        None => RadarDomain::portfolio(),
    }
}

/// Route a DOM event on `target` into the tooltip state machine.
/// Clicks on chart elements stop propagating so the document-level
/// "click outside" handler does not see them.
fn listen(
    view: &Rc<RadarView>,
    target: &web_sys::EventTarget,
    kind: &str,
    event: TooltipEvent,
    stop_propagation: bool,
) -> Result<(), JsValue> {
    let view = view.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
        if stop_propagation {
            e.stop_propagation();
        }
        view.chart.borrow_mut().handle(event);
        if let Err(err) = view.show_tooltip() {
            log::warn!("radar: tooltip update failed: {:?}", err);
        }
    });
    target.add_event_listener_with_callback(kind, handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

impl RadarView {
    /// Move the polygon and dots to their targets; CSS transitions animate the change.
    fn show_targets(&self) -> Result<(), JsValue> {
        let chart = self.chart.borrow();
        self.area.set_attribute("points", &points_attr(chart.area()))?;
        for (dot, vertex) in self.dots.iter().zip(chart.area()) {
            dot.set_attribute("cx", &fmt(vertex.x))?;
            dot.set_attribute("cy", &fmt(vertex.y))?;
        }
        Ok(())
    }

    fn show_tooltip(&self) -> Result<(), JsValue> {
        let chart = self.chart.borrow();
        for (i, label) in self.labels.iter().enumerate() {
            if chart.is_label_active(i) {
                label.class_list().add_1(ACTIVE_LABEL)?;
            } else {
                label.class_list().remove_1(ACTIVE_LABEL)?;
            }
        }

        let (Some(content), Some(position)) =
            (chart.tooltip_content(), chart.tooltip_position(&self.frame()))
        else {
            return self.tooltip.class_list().remove_1(VISIBLE_TOOLTIP);
        };

        self.tooltip_name.set_text_content(Some(&content.name));
        self.tooltip_level.set_inner_html("");
        let document = dom::document()?;
        for filled in content.marks {
            let mark = document.create_element("span")?;
            mark.set_class_name(if filled {
                "radar__tooltip-dot radar__tooltip-dot--filled"
            } else {
                "radar__tooltip-dot"
            });
            self.tooltip_level.append_child(&mark)?;
        }
        self.tooltip_skills.set_text_content(Some(&content.description));

        let (left, right) = match position.anchor {
            TooltipAnchor::Left(px) => (format!("{px}px"), "auto".to_string()),
            TooltipAnchor::Right(px) => ("auto".to_string(), format!("{px}px")),
        };
        dom::set_style(&self.tooltip, "left", &left)?;
        dom::set_style(&self.tooltip, "right", &right)?;
        dom::set_style(&self.tooltip, "top", &format!("{}px", position.top))?;
        self.tooltip.class_list().add_1(VISIBLE_TOOLTIP)
    }

    /// Where the chart is drawn inside the radar container right now.
    fn frame(&self) -> ChartFrame {
        let chart = self.wrapper.get_bounding_client_rect();
        let container = self.root.get_bounding_client_rect();
        ChartFrame {
            offset: Vec2::new(
                (chart.left() - container.left()) as f32,
                (chart.top() - container.top()) as f32,
            ),
            width: chart.width() as f32,
            container_width: container.width() as f32,
        }
    }
}

fn fmt(v: f32) -> String {
    format!("{v:.1}")
}
