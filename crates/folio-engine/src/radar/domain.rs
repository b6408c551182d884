use serde::{Deserialize, Serialize};

/// One labeled axis of the skill radar.
///
/// `level` is expected in 0..=10. It is not validated: content is trusted data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarDomain {
    pub name: String,
    pub level: u8,
    /// Free text shown in the tooltip (e.g. the skills behind the level).
    #[serde(alias = "skills", default)]
    pub description: String,
}

impl RadarDomain {
    pub fn new(name: impl Into<String>, level: u8, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            description: description.into(),
        }
    }

    /// Parse a domain list from a JSON array.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The built-in domain list shown when the page supplies none.
    pub fn portfolio() -> Vec<Self> {
        vec![
            Self::new("Product", 10, "Roadmap, discovery, delivery, priorización"),
            Self::new("GenAI", 9, "LLMs, RAG, deep learning, Databricks"),
            Self::new("Growth", 9, "A/B testing, CRO, retención, experimentación"),
            Self::new("Liderazgo", 9, "+20 personas, 4 squads, mentoring, cultura"),
            Self::new("Datos", 8, "Analytics, forecasting, dashboards, métricas"),
            Self::new("Software", 8, "Python, FastAPI, NextJS, Docker, CI/CD"),
            Self::new("Operaciones", 6, "ERP, procesos, supply chain"),
            Self::new("Finanzas", 5, "P&L, EBITDA, unit economics, pricing"),
            Self::new("Ciberseguridad", 3, "Compliance, seguridad de datos"),
            Self::new("Legal", 3, "GDPR, contratos tech, IP"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_skills_alias() {
        let json = r#"[
            { "name": "Product", "level": 10, "skills": "Roadmap, discovery" },
            { "name": "Legal", "level": 3, "description": "GDPR" },
            { "name": "Bare", "level": 0 }
        ]"#;
        let domains = RadarDomain::list_from_json(json).unwrap();
        assert_eq!(domains.len(), 3);
        assert_eq!(domains[0].description, "Roadmap, discovery");
        assert_eq!(domains[1].description, "GDPR");
        assert_eq!(domains[2].description, "");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(RadarDomain::list_from_json(r#"[{ "name": "X" }]"#).is_err());
        assert!(RadarDomain::list_from_json("not json").is_err());
    }

    #[test]
    fn portfolio_has_ten_domains() {
        let domains = RadarDomain::portfolio();
        assert_eq!(domains.len(), 10);
        assert!(domains.iter().all(|d| d.level <= 10));
    }
}
