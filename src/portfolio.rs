//! Static portfolio content shown by the viewer.

use crate::carousel::{Carousel, CarouselTiming};
use crate::error::AppError;

/// One experience entry with its photo carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub title: String,
    pub role: String,
    pub duration: String,
    pub description: String,
    pub images: Vec<String>,
}

impl Experience {
    pub fn new(
        title: impl Into<String>,
        role: impl Into<String>,
        duration: impl Into<String>,
        description: impl Into<String>,
        images: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            role: role.into(),
            duration: duration.into(),
            description: description.into(),
            images,
        }
    }

    /// A bare entry for a caller-supplied image list
    pub fn custom(label: impl Into<String>, images: Vec<String>) -> Self {
        Self::new(label, String::new(), String::new(), String::new(), images)
    }

    /// Builds the carousel for this entry, labelled with the entry title
    pub fn carousel(&self, timing: CarouselTiming) -> Result<Carousel, AppError> {
        Carousel::with_timing(self.images.iter().cloned(), self.title.clone(), timing)
    }
}

/// The experience section of the portfolio
pub fn experiences() -> Vec<Experience> {
    vec![
        Experience::new(
            "IX25",
            "Designer",
            "Dec 2025",
            "Volunteered with the IX25 team, contributing to design work and supporting event logistics and coordination.",
            vec![
                "/Experience/IX25.png".to_string(),
                "/Experience/IX251.jpeg".to_string(),
                "/Experience/IX252.jpeg".to_string(),
            ],
        ),
        Experience::new(
            "Rotaractor",
            "Club Service Director / Sergeant at Arms",
            "Jun 2025 - Jun 2026",
            "Served as Professional Development Director, recognized as Dedicated Rotaractor for the year 2024-2025. Currently serving as Club Service Director for Rotaract Club of Matale.",
            vec![
                "/Experience/Rotaractor.jpeg".to_string(),
                "/Experience/Rotaractor1.jpeg".to_string(),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_experiences_have_images() {
        let entries = experiences();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|entry| !entry.images.is_empty()));
        assert_eq!(entries[0].images.len(), 3);
        assert_eq!(entries[1].images.len(), 2);
    }

    #[test]
    fn test_experience_carousel_uses_title_as_label() {
        let entry = &experiences()[1];
        let carousel = entry.carousel(CarouselTiming::default()).unwrap();
        assert_eq!(carousel.label(), "Rotaractor");
        assert_eq!(carousel.len(), 2);
    }

    #[test]
    fn test_custom_experience_without_images_fails() {
        let entry = Experience::custom("Nothing", Vec::new());
        assert!(matches!(
            entry.carousel(CarouselTiming::default()),
            Err(AppError::EmptyImageList)
        ));
    }
}
