//! schema.org structured data for the page head.

use serde::Serialize;

use crate::portfolio::Portfolio;

#[derive(Debug, Serialize)]
struct PersonLd<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(rename = "jobTitle")]
    job_title: &'a str,
    email: String,
    telephone: &'a str,
    image: &'a str,
    address: PlaceLd<'a>,
    #[serde(rename = "worksFor")]
    works_for: OrganizationLd<'a>,
    #[serde(rename = "sameAs")]
    same_as: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct PlaceLd<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "addressLocality")]
    locality: &'a str,
}

#[derive(Debug, Serialize)]
struct OrganizationLd<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
}

/// JSON-LD `Person` describing the portfolio owner.
pub fn person_json_ld(content: &Portfolio) -> String {
    let profile = &content.profile;
    let person = PersonLd {
        context: "https://schema.org",
        kind: "Person",
        name: profile.name,
        job_title: profile.headline,
        email: profile.contact.mailto(),
        telephone: profile.contact.phone,
        image: profile.photo,
        address: PlaceLd {
            kind: "PostalAddress",
            locality: profile.location,
        },
        works_for: OrganizationLd {
            kind: "Organization",
            name: content.employer.name,
        },
        same_as: vec![profile.contact.linkedin],
    };
    // plain structs of strings, serialization can't fail
    serde_json::to_string(&person).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::CONTENT;

    #[test]
    fn test_person_json_ld() {
        let raw = person_json_ld(&CONTENT);
        let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["name"], "Sruthi Priya");
        assert_eq!(value["email"], "mailto:stsruthipriya@gmail.com");
        assert_eq!(value["telephone"], "+91 9444545744");
        assert_eq!(
            value["sameAs"][0],
            "https://www.linkedin.com/in/sruthi-priya"
        );
        assert_eq!(value["address"]["addressLocality"], "Chennai, India");
    }
}
