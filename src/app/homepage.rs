use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::{ContactSection, ContactStrip, Footer};
use super::header::NavBar;
use super::resume::{About, Credentials, Experience, Skills};
use super::showcase::{Hero, Projects, Services};
use crate::portfolio::{Portfolio, CONTENT};
use crate::theme::{derive_color_scheme, DisplayMode};

#[component]
pub fn HomePage() -> impl IntoView {
    let mode = RwSignal::new(DisplayMode::default());

    view! {
        <Title text="Portfolio" />
        <Page content=&CONTENT mode />
    }
}

/// The whole portfolio, rendered from `content` in the current display `mode`.
#[component]
pub fn Page(content: &'static Portfolio, mode: RwSignal<DisplayMode>) -> impl IntoView {
    let palette = Memo::new(move |_| derive_color_scheme(mode.get()));
    let profile = content.profile;

    view! {
        <div
            data-mode=move || mode.get().as_str()
            class="min-h-screen transition-all duration-[400ms] ease-in-out"
            style=move || {
                let p = palette.get();
                format!("background: {}; color: {};", p.gradient, p.text)
            }
        >
            <NavBar profile mode palette />
            <Hero profile palette />
            <ContactStrip contact=profile.contact location=profile.location palette />
            <About paragraphs=profile.about palette />
            <Skills categories=content.skills palette />
            <Experience employer=content.employer entries=content.experience palette />
            <Services services=content.services palette />
            <Projects projects=content.projects palette />
            <Credentials
                education=content.education
                certifications=content.certifications
                palette
            />
            <ContactSection contact=profile.contact palette />
            <Footer name=profile.name palette />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Section;
    use crate::portfolio::*;

    fn render(content: &'static Portfolio, mode: DisplayMode) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let mode = RwSignal::new(mode);
            view! { <Page content mode /> }.to_html()
        })
    }

    fn escape(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Markup of the skill card for `category`, up to the next card.
    fn skill_card<'a>(html: &'a str, category: &str) -> &'a str {
        let marker = format!("data-category=\"{}\"", escape(category));
        let start = html
            .find(&marker)
            .unwrap_or_else(|| panic!("no card for {category}"));
        let rest = &html[start + marker.len()..];
        let end = rest.find("data-card=").unwrap_or(rest.len());
        &rest[..end]
    }

    fn assert_in_order(haystack: &str, labels: &[&str]) {
        let mut last = 0;
        for label in labels {
            let label = escape(label);
            let pos = haystack[last..]
                .find(&label)
                .unwrap_or_else(|| panic!("{label} missing or out of order"));
            last += pos + label.len();
        }
    }

    static FIXTURE: Portfolio = Portfolio {
        profile: Profile {
            name: "Test Person",
            initials: "TP",
            headline: "Fixture Engineer",
            tagline: "Only here for the tests",
            location: "Nowhere",
            photo: "/fixture.png",
            about: &["First paragraph.", "Second paragraph."],
            contact: Contact {
                email: "fixture@example.com",
                phone: "+1 555 0100",
                linkedin: "https://example.com/in/fixture",
            },
        },
        skills: &[
            SkillCategory {
                name: "Alpha",
                skills: &["zeta", "eta"],
            },
            SkillCategory {
                name: "Beta",
                skills: &["theta"],
            },
        ],
        employer: Employer {
            name: "Fixture Corp",
            role: "Tester",
            period: "2020 - 2021",
        },
        experience: &[ExperienceEntry {
            title: "Only Entry",
            description: "Did one thing.",
        }],
        services: &[ServiceOffering {
            icon: ServiceIcon::Build,
            title: "Fixture Service",
            description: "Serves fixtures.",
        }],
        projects: &[
            Project {
                title: "Project One",
                description: "First.",
                tech: &["tech-b", "tech-a"],
            },
            Project {
                title: "Project Two",
                description: "Second.",
                tech: &[],
            },
        ],
        education: Education {
            degree: "B.Sc. Testing",
            institution: "Fixture University",
            period: "2016-2020",
        },
        certifications: &[],
    };

    #[test]
    fn test_initial_render_is_dark() {
        let html = render(&CONTENT, DisplayMode::default());
        assert!(html.contains("data-mode=\"dark\""));
        assert!(html.contains("color: #e2e8f0"));
        assert!(html.contains("linear-gradient(135deg, #1e293b 0%, #0f0f1a 100%)"));
        assert!(html.contains("Light Mode"));
    }

    #[test]
    fn test_light_render() {
        let html = render(&CONTENT, DisplayMode::Light);
        assert!(html.contains("data-mode=\"light\""));
        assert!(html.contains("color: #1e293b"));
        assert!(html.contains("linear-gradient(135deg, #f8f9fc 0%, #e2e8f0 100%)"));
        assert!(!html.contains("#0f0f1a"));
    }

    #[test]
    fn test_toggle_twice_restores_render() {
        let owner = Owner::new();
        owner.with(|| {
            let mode = RwSignal::new(DisplayMode::default());
            let before = view! { <Page content=&CONTENT mode /> }.to_html();

            mode.update(DisplayMode::toggle);
            let toggled = view! { <Page content=&CONTENT mode /> }.to_html();
            assert!(toggled.contains("data-mode=\"light\""));

            mode.update(DisplayMode::toggle);
            let after = view! { <Page content=&CONTENT mode /> }.to_html();
            assert_eq!(before, after);
        });
    }

    #[test]
    fn test_skill_chips_follow_declared_order() {
        let html = render(&CONTENT, DisplayMode::Dark);
        for category in CONTENT.skills {
            let card = skill_card(&html, category.name);
            assert_eq!(
                card.matches("data-chip=\"skill\"").count(),
                category.skills.len(),
                "chip count for {}",
                category.name
            );
            assert_in_order(card, category.skills);
        }

        let databases = skill_card(&html, "Databases");
        assert_in_order(databases, &["SQLite", "MongoDB", "SQL Server"]);
    }

    #[test]
    fn test_project_cards() {
        let html = render(&CONTENT, DisplayMode::Dark);
        assert_eq!(html.matches("data-card=\"project\"").count(), 5);

        let projects = &html[html.find("id=\"projects\"").expect("projects anchor")..];
        let titles: Vec<_> = CONTENT.projects.iter().map(|p| p.title).collect();
        assert_in_order(projects, &titles);

        let marker = "data-card=\"project\"";
        let start = projects.find(marker).expect("first card");
        let end = projects[start + marker.len()..]
            .find(marker)
            .map_or(projects.len(), |i| start + marker.len() + i);
        let first_card = &projects[start..end];
        assert_eq!(first_card.matches("data-chip=\"tech\"").count(), 3);

        // the description also mentions Arena XR and Unity, so look from the first chip on
        let chips = &first_card[first_card.find("data-chip=\"tech\"").expect("tech chip")..];
        let first_label = chips.find("Arena XR").expect("Arena XR chip");
        assert!(chips.find("Unity").is_some_and(|i| i > first_label));
        assert_in_order(chips, &["Arena XR", "Unity", "C#"]);
    }

    #[test]
    fn test_experience_and_services_order() {
        let html = render(&CONTENT, DisplayMode::Dark);
        let experience = &html[html.find("id=\"experience\"").expect("experience anchor")..];
        let titles: Vec<_> = CONTENT.experience.iter().map(|e| e.title).collect();
        assert_in_order(experience, &titles);
        assert_eq!(html.matches("data-card=\"experience\"").count(), 5);

        let services: Vec<_> = CONTENT.services.iter().map(|s| s.title).collect();
        assert_in_order(&html, &services);
        assert_eq!(html.matches("data-card=\"service\"").count(), 4);
        assert!(html.contains("data-icon=\"code\""));
        assert!(html.contains("data-icon=\"visibility\""));
    }

    #[test]
    fn test_section_anchors_exist() {
        let html = render(&CONTENT, DisplayMode::Dark);
        for section in Section::ALL {
            assert!(
                html.contains(&format!("id=\"{}\"", section.id())),
                "missing anchor {}",
                section.id()
            );
        }
    }

    #[test]
    fn test_contact_links() {
        let html = render(&CONTENT, DisplayMode::Dark);
        assert!(html.contains("href=\"mailto:stsruthipriya@gmail.com\""));
        assert!(html.contains("href=\"tel:+919444545744\""));
        assert!(html.contains("+91 9444545744"));
        assert!(html.contains("href=\"https://www.linkedin.com/in/sruthi-priya\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("src=\"/profile.jpg\""));
        assert!(html.contains("href=\"#projects\""));
    }

    #[test]
    fn test_renders_fixture_content() {
        let html = render(&FIXTURE, DisplayMode::Dark);

        assert!(html.contains("Test Person"));
        assert!(!html.contains("Sruthi Priya"));
        assert!(!html.contains("stsruthipriya@gmail.com"));

        assert_eq!(html.matches("data-card=\"skills\"").count(), 2);
        let alpha = skill_card(&html, "Alpha");
        assert_eq!(alpha.matches("data-chip=\"skill\"").count(), 2);
        assert_in_order(alpha, &["zeta", "eta"]);

        assert_eq!(html.matches("data-card=\"project\"").count(), 2);
        assert_eq!(html.matches("data-chip=\"tech\"").count(), 2);
        assert_in_order(&html, &["tech-b", "tech-a"]);

        assert_eq!(html.matches("data-card=\"experience\"").count(), 1);
        assert_eq!(html.matches("data-card=\"service\"").count(), 1);
        assert!(html.contains("data-icon=\"build\""));
        assert!(html.contains("href=\"mailto:fixture@example.com\""));
    }
}
