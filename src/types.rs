// src/types.rs
//! Résumé document model shared by the web layer and the renderer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform_name: String,
    pub link_to_profile: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub full_name: String,
    pub phone_no: String,
    pub email: String,
    pub socials: Vec<SocialLink>,
}

/// All year fields are opaque text, echoed verbatim into the output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub name: String,
    pub degree: String,
    pub start_year: String,
    pub end_year: String,
    pub grade: String,
}

/// A single bullet line. The wire format wraps each line in its own
/// object rather than sending a plain string array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionPoint {
    pub points: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub position: String,
    pub company_name: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: Vec<DescriptionPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub tech_stack: String,
    pub link_to_project: String,
    pub description: Vec<DescriptionPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillName {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub tech_skills: Vec<SkillName>,
    pub frameworks: Vec<SkillName>,
    pub developer_tools: Vec<SkillName>,
    pub libraries: Vec<SkillName>,
}

/// Root document. Every field is required; a request body missing any of
/// them is rejected during deserialization before rendering starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub profile: Profile,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub project: Vec<Project>,
    pub skills: Skills,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_document_json() -> &'static str {
        r#"{
            "profile": {
                "full_name": "Jane Doe",
                "phone_no": "+41 79 000 00 00",
                "email": "jane@example.com",
                "socials": [
                    {"platform_name": "GitHub", "link_to_profile": "https://github.com/jane"},
                    {"platform_name": "LinkedIn", "link_to_profile": "https://linkedin.com/in/jane"}
                ]
            },
            "education": [
                {"name": "ETH Zurich", "degree": "MSc CS", "start_year": "2018", "end_year": "2020", "grade": "5.5/6"}
            ],
            "experience": [
                {"position": "Engineer", "company_name": "Acme", "location": "Zurich",
                 "start_date": "2020", "end_date": "Present",
                 "description": [{"points": "Built things"}, {"points": "Fixed things"}]}
            ],
            "project": [
                {"name": "resumaker", "tech_stack": "Rust", "link_to_project": "https://example.com",
                 "description": [{"points": "A resume generator"}]}
            ],
            "skills": {
                "tech_skills": [{"name": "Rust"}, {"name": "Python"}],
                "frameworks": [{"name": "Rocket"}],
                "developer_tools": [],
                "libraries": [{"name": "serde"}]
            }
        }"#
    }

    #[test]
    fn test_deserialize_full_document() {
        let doc: ResumeDocument = serde_json::from_str(full_document_json()).unwrap();
        assert_eq!(doc.profile.full_name, "Jane Doe");
        assert_eq!(doc.profile.socials.len(), 2);
        assert_eq!(doc.profile.socials[0].platform_name, "GitHub");
        assert_eq!(doc.experience[0].description.len(), 2);
        assert_eq!(doc.skills.developer_tools.len(), 0);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        // profile.email removed
        let body = r#"{
            "profile": {"full_name": "Jane", "phone_no": "1", "socials": []},
            "education": [], "experience": [], "project": [],
            "skills": {"tech_skills": [], "frameworks": [], "developer_tools": [], "libraries": []}
        }"#;
        assert!(serde_json::from_str::<ResumeDocument>(body).is_err());
    }

    #[test]
    fn test_sequence_order_is_preserved() {
        let doc: ResumeDocument = serde_json::from_str(full_document_json()).unwrap();
        let names: Vec<&str> = doc
            .skills
            .tech_skills
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Rust", "Python"]);
    }
}
