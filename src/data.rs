//! Hard-coded catalog and page copy. Everything here is provided at startup
//! and read-only for the session.

use once_cell::sync::Lazy;

use crate::models::{Category, Content, Project, Service, Stat, UserProfile};

fn pexels(id: u32, width: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w={width}"
    )
}

#[allow(clippy::too_many_arguments)]
fn content(
    id: &str,
    title: &str,
    description: &str,
    image_id: u32,
    year: i32,
    rating: &str,
    duration: &str,
    genre: &[&str],
    cast: &[&str],
    director: &str,
    maturity_rating: &str,
) -> Content {
    Content {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        thumbnail: pexels(image_id, 800),
        background_image: pexels(image_id, 1920),
        year,
        rating: rating.to_string(),
        duration: duration.to_string(),
        genre: genre.iter().map(|g| g.to_string()).collect(),
        cast: cast.iter().map(|c| c.to_string()).collect(),
        director: director.to_string(),
        language: "English".to_string(),
        maturity_rating: maturity_rating.to_string(),
        ..Default::default()
    }
}

/// Item shown in the hero banner on startup.
pub static FEATURED: Lazy<Content> = Lazy::new(|| {
    let mut c = content(
        "featured-1",
        "Echoes of the Deep",
        "A marine biologist discovers a signal rising from an ocean trench that \
         rewrites everything we thought we knew about life below. As governments \
         race to claim the find, she must decide who can be trusted with it.",
        3894157,
        2024,
        "97%",
        "2h 18m",
        &["Sci-Fi", "Thriller", "Drama"],
        &["Mara Ellison", "Devon Osei", "Ingrid Halvorsen"],
        "Paula Reyes",
        "PG-13",
    );
    c.is_new = true;
    c.trailer_url = Some("https://example.com/trailers/echoes-of-the-deep".to_string());
    c
});

pub static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    let midnight = {
        let mut c = content(
            "c-101",
            "Midnight Dispatch",
            "Two night-shift paramedics patrol a city that never quite sleeps, \
             and never quite tells the truth.",
            1557652,
            2023,
            "94%",
            "8 Episodes",
            &["Drama", "Crime"],
            &["Sofia Brandt", "Kwame Mensah"],
            "Lena Okafor",
            "TV-MA",
        );
        c.has_new_episode = true;
        c
    };
    let orchard = content(
        "c-102",
        "The Last Orchard",
        "Three generations of a farming family fight drought, debt, and each \
         other over one final harvest.",
        1300972,
        2022,
        "89%",
        "1h 52m",
        &["Drama", "Family"],
        &["Ruth Calloway", "Ben Arceneaux", "Mia Tan"],
        "Harold Finch",
        "PG",
    );
    let signal = {
        let mut c = content(
            "c-103",
            "Signal Lost",
            "A deep-space relay crew loses contact with Earth and starts \
             receiving transmissions dated forty years in the future.",
            2156881,
            2024,
            "91%",
            "2h 4m",
            &["Sci-Fi", "Mystery"],
            &["Theo Marsh", "Anya Petrova"],
            "Caleb Nwosu",
            "PG-13",
        );
        c.is_new = true;
        c
    };
    let sourdough = content(
        "c-104",
        "Rising: A Baker's Year",
        "Twelve bakeries, four seasons, one question: can craft survive the \
         supermarket age?",
        1070850,
        2021,
        "85%",
        "6 Episodes",
        &["Documentary", "Food"],
        &["Narrated by June Alvarez"],
        "Pieter Koolhaas",
        "TV-G",
    );
    let lanterns = {
        let mut c = content(
            "c-105",
            "Paper Lanterns",
            "An animated tale of a girl who mails her wishes to the moon and \
             gets one back, postage due.",
            1766838,
            2020,
            "96%",
            "1h 41m",
            &["Animation", "Family", "Fantasy"],
            &["Yuki Ono", "Claire Beaumont"],
            "Renata Sol",
            "G",
        );
        c.is_leaving = true;
        c
    };
    let ledger = content(
        "c-106",
        "The Copper Ledger",
        "A forensic accountant unpicks a century-old bank fraud and finds her \
         own family name in the margins.",
        534216,
        2023,
        "88%",
        "10 Episodes",
        &["Thriller", "Mystery"],
        &["Nadia Rahim", "Oscar Lindqvist", "Priya Nair"],
        "Tomas Vega",
        "TV-14",
    );
    let switchback = {
        let mut c = content(
            "c-107",
            "Switchback",
            "A mountain rescue team races a storm front to reach a stranded \
             climbing expedition with a secret worth dying for.",
            618848,
            2024,
            "82%",
            "1h 58m",
            &["Action", "Adventure"],
            &["Jonas Keller", "Amara Diallo"],
            "Fiona Gallagher",
            "PG-13",
        );
        c.is_new = true;
        c
    };
    let tidepool = content(
        "c-108",
        "Tidepool",
        "Small creatures, big drama. A macro-lens look at the fiercest \
         neighborhood on the shoreline.",
        1576937,
        2022,
        "93%",
        "5 Episodes",
        &["Documentary", "Nature"],
        &["Narrated by Elliot Frye"],
        "Sanne de Vries",
        "TV-G",
    );

    vec![
        Category {
            id: "trending".to_string(),
            name: "Trending Now".to_string(),
            content: vec![
                midnight.clone(),
                signal.clone(),
                switchback.clone(),
                ledger.clone(),
                lanterns.clone(),
            ],
        },
        Category {
            id: "new-releases".to_string(),
            name: "New Releases".to_string(),
            content: vec![signal, switchback, FEATURED.clone()],
        },
        Category {
            id: "documentaries".to_string(),
            name: "Documentaries".to_string(),
            content: vec![sourdough, tidepool],
        },
        Category {
            id: "leaving-soon".to_string(),
            name: "Leaving Soon".to_string(),
            content: vec![lanterns, orchard, midnight],
        },
    ]
});

pub static PROFILES: Lazy<Vec<UserProfile>> = Lazy::new(|| {
    vec![
        UserProfile {
            id: "p-1".to_string(),
            name: "Alex".to_string(),
            avatar: "A".to_string(),
            is_kids: false,
        },
        UserProfile {
            id: "p-2".to_string(),
            name: "Sam".to_string(),
            avatar: "S".to_string(),
            is_kids: false,
        },
        UserProfile {
            id: "p-3".to_string(),
            name: "Robin".to_string(),
            avatar: "R".to_string(),
            is_kids: false,
        },
        UserProfile {
            id: "p-4".to_string(),
            name: "Kids".to_string(),
            avatar: "K".to_string(),
            is_kids: true,
        },
    ]
});

// Portfolio page copy.

pub static SERVICES: Lazy<Vec<Service>> = Lazy::new(|| {
    let s = |title: &str, description: &str| Service {
        title: title.to_string(),
        description: description.to_string(),
    };
    vec![
        s(
            "Frontend Development",
            "Modern React & Angular applications with stunning UI/UX design and \
             seamless user experiences.",
        ),
        s(
            "Backend Development",
            "Scalable Node.js APIs, database design, and server architecture for \
             robust applications.",
        ),
        s(
            "Analytics & Tracking",
            "Google Tag Manager implementation, conversion tracking, and \
             performance optimization.",
        ),
        s(
            "Performance Optimization",
            "Speed optimization, SEO enhancement, and technical audits for \
             maximum performance.",
        ),
    ]
});

pub static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    let p = |title: &str, description: &str, tech: &[&str], image_id: u32| Project {
        title: title.to_string(),
        description: description.to_string(),
        tech: tech.iter().map(|t| t.to_string()).collect(),
        image: pexels(image_id, 800),
    };
    vec![
        p(
            "E-Commerce Platform",
            "Full-stack React e-commerce with Node.js backend, Stripe payments, \
             and real-time inventory.",
            &["React", "Node.js", "MongoDB", "Stripe"],
            230544,
        ),
        p(
            "SaaS Dashboard",
            "Analytics dashboard with real-time data visualization, user \
             management, and subscription billing.",
            &["Angular", "D3.js", "Firebase", "GTM"],
            590020,
        ),
        p(
            "Fintech Application",
            "Secure financial platform with advanced authentication, transaction \
             processing, and reporting.",
            &["React", "Node.js", "PostgreSQL", "Redis"],
            574071,
        ),
    ]
});

pub static STATS: Lazy<Vec<Stat>> = Lazy::new(|| {
    let s = |number: &str, label: &str| Stat {
        number: number.to_string(),
        label: label.to_string(),
    };
    vec![
        s("50+", "Projects Completed"),
        s("6+", "Years Experience"),
        s("30+", "Happy Clients"),
        s("99%", "Success Rate"),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn category_ids_are_unique() {
        let mut seen = HashSet::new();
        for cat in CATEGORIES.iter() {
            assert!(seen.insert(cat.id.clone()), "duplicate category id {}", cat.id);
        }
    }

    #[test]
    fn content_ids_unique_within_each_row() {
        for cat in CATEGORIES.iter() {
            let mut seen = HashSet::new();
            for item in &cat.content {
                assert!(
                    seen.insert(item.id.clone()),
                    "duplicate content id {} in category {}",
                    item.id,
                    cat.id
                );
            }
        }
    }

    #[test]
    fn every_row_has_content() {
        for cat in CATEGORIES.iter() {
            assert!(!cat.content.is_empty(), "empty category {}", cat.id);
        }
    }

    #[test]
    fn exactly_one_kids_profile() {
        assert_eq!(PROFILES.iter().filter(|p| p.is_kids).count(), 1);
    }
}
