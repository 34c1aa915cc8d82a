use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageCategory {
    Art,
    Nature,
    Tech,
}

impl ImageCategory {
    pub const ALL: [ImageCategory; 3] = [ImageCategory::Art, ImageCategory::Nature, ImageCategory::Tech];

    pub fn as_str(self) -> &'static str {
        match self {
            ImageCategory::Art => "art",
            ImageCategory::Nature => "nature",
            ImageCategory::Tech => "tech",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImageCategory::Art => "Art",
            ImageCategory::Nature => "Nature",
            ImageCategory::Tech => "Tech",
        }
    }
}

impl fmt::Display for ImageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageCategory {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        ImageCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseCategoryError {
                value: trimmed.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    pub value: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gallery category '{}'", self.value)
    }
}

impl std::error::Error for ParseCategoryError {}

/// One gallery image. Identity is its index in [`GALLERY_CATALOG`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub path: &'static str,
    pub category: ImageCategory,
    pub caption: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillEntry {
    pub label: &'static str,
    /// Percent of the bar, 0..=100.
    pub level: u32,
}

impl SkillEntry {
    pub fn width_css(&self) -> String {
        format!("{}%", self.level.min(100))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub link: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/site_content.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_accepts_mixed_case() {
        assert_eq!("Nature".parse::<ImageCategory>(), Ok(ImageCategory::Nature));
        assert_eq!(" tech ".parse::<ImageCategory>(), Ok(ImageCategory::Tech));
        assert!("sculpture".parse::<ImageCategory>().is_err());
    }

    #[test]
    fn generated_catalog_matches_content_file() {
        assert_eq!(GALLERY_CATALOG.len(), 12);
        assert_eq!(GALLERY_CATALOG[0].path, "18.jpg");
        assert_eq!(GALLERY_CATALOG[8].path, "22.jpg");
        assert!(SKILLS.iter().all(|skill| skill.level <= 100));
    }

    #[test]
    fn skill_width_is_clamped_percent() {
        let skill = SkillEntry { label: "x", level: 140 };
        assert_eq!(skill.width_css(), "100%");
    }
}
