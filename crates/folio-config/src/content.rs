//! Portfolio content: profile, skills, timeline, projects, certificates and contact.
//!
//! Links are opaque strings, displayed as written.

use serde::{Deserialize, Serialize};

/// Headline numbers on the profile card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Hero section and profile card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub handle: String,
    pub greeting: String,
    /// Phrases cycled by the typewriter headline.
    pub phrases: Vec<String>,
    pub bio: String,
    pub status: String,
    pub badge: String,
    pub card_id: String,
    /// Short labels under the hero text.
    pub highlights: Vec<String>,
    pub stats: Vec<Stat>,
}

/// One card of the skills grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub title: String,
    /// Glyph drawn next to the title.
    pub icon: String,
    pub items: Vec<String>,
}

/// One stop on the timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    pub year: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub tag: String,
    pub description: String,
    /// Accent gradient name, shown when there is no image.
    pub accent: String,
    pub image: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Contact block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub pitch: String,
    pub email: String,
    pub mail_link: String,
    pub links: Vec<Link>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const MAIL_LINK: &str = "https://mail.google.com/mail/?view=cm&fs=1&to=kirti8473@gmail.com";

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Kirti Vardhan Gupta".into(),
            handle: "@CyberAnalyst".into(),
            greeting: "Hello, I'm".into(),
            phrases: strings(&[
                "Kirti Vardhan Gupta",
                "Problem Solver",
                "a Full Stack Developer",
                "a Malware Analyst",
            ]),
            bio: "Driven Computer Science student passionate about solving real-world problems \
                  through code. I specialize in Android development and AI integration, having \
                  built applications like 'Thread Guard' (a scam detection tool) and an \
                  AI-powered Voice Interviewer. With a strong foundation in Java, Python (Flask), \
                  and Cybersecurity, I aim to build secure, intelligent, and user-centric \
                  software solutions"
                .into(),
            status: "System Online".into(),
            badge: "ADMIN".into(),
            card_id: "ID: 1029KV".into(),
            highlights: strings(&["Security Focused", "Full Stack Capable"]),
            stats: vec![
                Stat {
                    value: "10+".into(),
                    label: "Certificates".into(),
                },
                Stat {
                    value: "5+".into(),
                    label: "Projects".into(),
                },
            ],
        }
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            pitch: "I am currently open to internship opportunities and collaborative projects \
                    in Cyber Security and Development."
                .into(),
            email: "kirti8473@gmail.com".into(),
            mail_link: MAIL_LINK.into(),
            links: vec![
                Link {
                    label: "LinkedIn Profile".into(),
                    url: "https://www.linkedin.com/in/kirti-vardhan-gupta-1029kv".into(),
                },
                Link {
                    label: "GitHub Profile".into(),
                    url: "https://github.com/kv1029".into(),
                },
            ],
        }
    }
}

/// Built-in skills grid.
pub(crate) fn default_skills() -> Vec<SkillCategory> {
    let category = |title: &str, icon: &str, items: &[&str]| SkillCategory {
        title: title.into(),
        icon: icon.into(),
        items: strings(items),
    };
    vec![
        category("Programming", ">_", &["Java", "Python", "JavaScript", "C++"]),
        category(
            "Cyber Security",
            "⛨",
            &["Network Security", "Ethical Hacking", "Cryptography", "Linux"],
        ),
        category("Web Dev", "◍", &["React", "Node.js", "HTML/CSS", "Tailwind"]),
        category(
            "Backend/Cloud",
            "⛁",
            &["SQL", "AWS Basics", "Networking", "REST APIs"],
        ),
    ]
}

/// Built-in timeline.
pub(crate) fn default_journey() -> Vec<TimelineEntry> {
    let entry = |year: &str, title: &str, text: &str| TimelineEntry {
        year: year.into(),
        title: title.into(),
        text: text.into(),
    };
    vec![
        entry("2022", "High School Education", "Completed 10th."),
        entry(
            "2024",
            "12th Education Completed",
            "Completed 12th from Ryan International School with physics, chemistry and maths.",
        ),
        entry(
            "2024",
            "Undergrad at GLA",
            "Started B.Tech in Computer Science at GLA University, building a strong foundation.",
        ),
        entry(
            "2024",
            "Web Development",
            "Dived deep into Full Stack development, mastering React, Node.js and modern UI frameworks.",
        ),
        entry(
            "2025",
            "Cyber Security Focus",
            "Shifted focus towards Network Security and Ethical Hacking, bridging the gap between dev and sec.",
        ),
        entry(
            "2025",
            "Professional Growth",
            "Gaining real-world experience through internships and advanced certifications.",
        ),
    ]
}

/// Built-in project cards.
pub(crate) fn default_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Phishing URL Detector".into(),
            tag: "AI MODEL".into(),
            description: "Lightweight ML + heuristics prototype for detecting malicious URLs \
                          and emails. Uses pattern recognition to flag potential threats. \
                          URLs and PDF files are checked with the Gemini model."
                .into(),
            accent: "red-orange".into(),
            image: Some(
                "https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?auto=format&fit=crop&q=80&w=800"
                    .into(),
            ),
            link: Some("https://phishing-url-detector-weld.vercel.app/".into()),
        },
        Project {
            title: "AI Interviewer - Powered by Gemini".into(),
            tag: "AI / LLM".into(),
            description: "An intelligent, automated interview simulation platform built on \
                          Google's Gemini model. It conducts realistic technical and behavioral \
                          interviews with real-time interaction and feedback."
                .into(),
            accent: "blue-cyan".into(),
            image: Some(
                "https://images.unsplash.com/photo-1677442136019-21780ecad995?auto=format&fit=crop&q=80&w=800"
                    .into(),
            ),
            link: Some("https://ai-interview-three-khaki.vercel.app/".into()),
        },
        Project {
            title: "Showcase model for Shop".into(),
            tag: "E-Commerce".into(),
            description: "Interactive digital catalog designed to elegantly display products \
                          and enhance user engagement for retail businesses."
                .into(),
            accent: "green-emerald".into(),
            image: Some(
                "https://img.freepik.com/free-photo/courage-man-jump-through-gap-hill-business-concept-idea_1323-262.jpg?semt=ais_hybrid&w=740&q=80"
                    .into(),
            ),
            link: Some("#".into()),
        },
    ]
}

/// Built-in certificate list.
pub(crate) fn default_certificates() -> Vec<Certificate> {
    let cert = |title: &str, issuer: &str, date: &str, description: &str, link: &str| {
        Certificate {
            title: title.into(),
            issuer: issuer.into(),
            date: date.into(),
            description: description.into(),
            link: link.into(),
        }
    };
    vec![
        cert(
            "Networking Basics",
            "Cisco Networking Academy",
            "Nov 2025",
            "Proficient in network communication concepts, IPv4/IPv6, and troubleshooting.",
            "/networking.pdf",
        ),
        cert(
            "Cyber Internship",
            "CYBERZERO & Council",
            "45 Days",
            "Practical knowledge across various domains of cybersecurity.",
            "/internship.pdf",
        ),
        cert(
            "Java (Basic)",
            "HackerRank",
            "Nov 2025",
            "Passed the HackerRank skill certification test for Java proficiency.",
            "/java_basic certificate.pdf",
        ),
        cert(
            "Cyber Job Sim",
            "Mastercard (Forage)",
            "Sept 2025",
            "Phishing email simulation design and result interpretation.",
            "/cyberjo.pdf",
        ),
        cert(
            "Cyber Job Sim",
            "Deloitte (Forage)",
            "Sept 2025",
            "Completed practical tasks in Cyber security consulting.",
            "/cyber.pdf",
        ),
        cert(
            "Solutions Architect",
            "AWS (Forage)",
            "Sept 2025",
            "Designed simple, scalable hosting architecture.",
            "/archi.pdf",
        ),
    ]
}
