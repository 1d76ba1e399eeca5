use crate::showcase::{ImageRef, ProjectCatalog, ProjectRecord};
use std::time::Duration;

pub const HERO_TITLE: &str = "JORDAN REYES";
pub const HERO_LEAD: &str = "Aspiring Computer Engineer & Full Stack Developer";
pub const HERO_TITLE_SPEED: Duration = Duration::from_millis(150);
pub const HERO_LEAD_SPEED: Duration = Duration::from_millis(50);

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#skills", label: "Skills" },
    NavLink { href: "#experience", label: "Experience" },
    NavLink { href: "#projects", label: "Projects" },
    NavLink { href: "#contact", label: "Contact" },
];

pub struct Skill {
    pub label: &'static str,
    pub progress: &'static str,
}

pub const SKILLS: [Skill; 5] = [
    Skill { label: "HTML & CSS", progress: "90%" },
    Skill { label: "JavaScript / TypeScript", progress: "82%" },
    Skill { label: "Rust", progress: "70%" },
    Skill { label: "C / Embedded", progress: "75%" },
    Skill { label: "SQL", progress: "68%" },
];

pub struct TimelineEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        period: "2025 - Present",
        title: "Web Developer Intern",
        detail: "Maintains the public site and internal dashboards for a regional ISP.",
    },
    TimelineEntry {
        period: "2024",
        title: "Hardware Lab Assistant",
        detail: "Ran microcontroller labs and kept the bench equipment calibrated.",
    },
    TimelineEntry {
        period: "2022 - Present",
        title: "BS Computer Engineering",
        detail: "Embedded systems track with a focus on networked sensing.",
    },
];

pub const SEMINARS: [&str; 4] = [
    "Secure Web Applications Workshop",
    "Intro to FPGA Design",
    "Cloud Fundamentals Bootcamp",
    "IoT Systems Summit",
];

pub fn project_catalog() -> ProjectCatalog {
    ProjectCatalog::new(vec![
        project(
            "campus-nav",
            "Campus Navigator",
            "Indoor wayfinding web app with offline floor plans and accessible routes.",
            &["/projects/campus-nav-1.webp", "/projects/campus-nav-2.webp", "/projects/campus-nav-3.webp"],
            Some("TypeScript, Leaflet, IndexedDB"),
        ),
        project(
            "plant-monitor",
            "Smart Plant Monitor",
            "ESP32 soil and light sensors reporting to a small dashboard over MQTT.",
            &["/projects/plant-monitor-1.webp", "/projects/plant-monitor-2.webp"],
            Some("C, ESP32, MQTT, Chart.js"),
        ),
        project(
            "queue-board",
            "Clinic Queue Board",
            "Real-time queue display for a barangay health center.",
            &["/projects/queue-board-1.webp"],
            None,
        ),
    ])
}

fn project(
    id: &str,
    name: &str,
    description: &str,
    images: &[&str],
    technologies: Option<&str>,
) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        images: images
            .iter()
            .enumerate()
            .map(|(index, src)| ImageRef {
                src: src.to_string(),
                alt: format!("{name} screenshot {}", index + 1),
            })
            .collect(),
        technologies: technologies.map(ToString::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{reveal::parse_progress, showcase::MODAL_IMAGE_SLOTS};
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique_and_fit_the_modal() {
        let catalog = project_catalog();
        let ids: HashSet<_> = catalog.records().iter().map(|record| record.id.as_str()).collect();

        assert_eq!(ids.len(), catalog.records().len());
        assert!(catalog
            .records()
            .iter()
            .all(|record| !record.images.is_empty() && record.images.len() <= MODAL_IMAGE_SLOTS));
    }

    #[test]
    fn skill_progress_values_parse() {
        assert!(SKILLS.iter().all(|skill| parse_progress(skill.progress).is_some()));
    }

    #[test]
    fn nav_links_are_in_page_anchors() {
        assert!(NAV_LINKS.iter().all(|link| link.href.starts_with('#')));
    }
}
