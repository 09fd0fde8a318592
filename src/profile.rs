use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static PROFILE_JSON: &str = include_str!("../content/profile.json");

pub static PROFILE: LazyLock<Profile> = LazyLock::new(|| {
    Profile::from_json(PROFILE_JSON).expect("content/profile.json should be a valid profile")
});

/// Everything the site says about its owner. Rendered by the page sections and
/// by the printable résumé, so the two never drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub email: String,
    pub linkedin: String,
    pub summary: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub facts: Vec<Fact>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub achievements: Vec<String>,
    pub interests: CareerInterests,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub standing: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub organization: String,
    pub role: String,
    pub highlights: Vec<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Self-assessed proficiency, in percent.
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerInterests {
    pub roles: Vec<String>,
    pub traits: Vec<String>,
    pub availability: String,
}

impl Profile {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Used for the greeting line of contact emails.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

pub fn profile() -> &'static Profile {
    &PROFILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_profile_parses() {
        let p = profile();
        assert_eq!(p.name, "Priyansu Nag");
        assert_eq!(p.education.len(), 2);
        assert_eq!(p.certifications.len(), 4);
        assert_eq!(p.skills.len(), 4);
        assert!(p.skills.iter().all(|g| g.skills.len() == 5));
    }

    #[test]
    fn skill_levels_are_percentages() {
        for group in &profile().skills {
            for skill in &group.skills {
                assert!(skill.level <= 100, "{} is {}", skill.name, skill.level);
            }
        }
    }

    #[test]
    fn first_name_is_first_word() {
        assert_eq!(profile().first_name(), "Priyansu");
    }

    #[test]
    fn first_name_of_single_word_name() {
        let mut p = profile().clone();
        p.name = "Cher".to_string();
        assert_eq!(p.first_name(), "Cher");
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let mut value = serde_json::to_value(profile()).unwrap();
        let obj = value.as_object_mut().unwrap();
        obj.remove("about");
        obj.remove("facts");
        let p: Profile = serde_json::from_value(value).unwrap();
        assert!(p.about.is_empty());
        assert!(p.facts.is_empty());
    }

    #[test]
    fn missing_required_field_is_an_error() {
        assert!(Profile::from_json(r#"{"name": "Nobody"}"#).is_err());
    }
}
