//! Built-in internship catalogue used to seed a fresh data directory.

use pmis_types::{Internship, InternshipId};

struct Listing {
    id: &'static str,
    title: &'static str,
    organization: &'static str,
    sector: &'static str,
    location: &'static str,
    duration: &'static str,
    stipend: u32,
    required_skills: &'static [&'static str],
    description: &'static str,
    capacity: u32,
    affirmative_action_required: bool,
}

const LISTINGS: [Listing; 8] = [
    Listing {
        id: "INT001",
        title: "Digital Marketing Intern",
        organization: "Ministry of Electronics and IT",
        sector: "Technology",
        location: "New Delhi",
        duration: "6 months",
        stipend: 15000,
        required_skills: &[
            "Digital Marketing",
            "Social Media",
            "Content Writing",
            "Analytics",
        ],
        description: "Support digital initiatives and social media campaigns for government technology programs.",
        capacity: 50,
        affirmative_action_required: true,
    },
    Listing {
        id: "INT002",
        title: "Data Analytics Intern",
        organization: "National Sample Survey Office",
        sector: "Research & Analytics",
        location: "Mumbai",
        duration: "6 months",
        stipend: 18000,
        required_skills: &["Python", "Data Analysis", "Statistics", "Excel"],
        description: "Assist in analyzing survey data and generating insights for policy making.",
        capacity: 30,
        affirmative_action_required: false,
    },
    Listing {
        id: "INT003",
        title: "Rural Development Assistant",
        organization: "Ministry of Rural Development",
        sector: "Rural Development",
        location: "Bhopal",
        duration: "8 months",
        stipend: 12000,
        required_skills: &[
            "Project Management",
            "Community Engagement",
            "Documentation",
        ],
        description: "Support rural development programs and community outreach initiatives.",
        capacity: 75,
        affirmative_action_required: true,
    },
    Listing {
        id: "INT004",
        title: "Financial Analysis Intern",
        organization: "Reserve Bank of India",
        sector: "Finance & Banking",
        location: "Chennai",
        duration: "6 months",
        stipend: 20000,
        required_skills: &["Financial Analysis", "Economics", "Excel", "Research"],
        description: "Assist in economic research and financial market analysis.",
        capacity: 25,
        affirmative_action_required: false,
    },
    Listing {
        id: "INT005",
        title: "Healthcare Analytics Intern",
        organization: "All Institute of Medical Sciences",
        sector: "Healthcare",
        location: "Bangalore",
        duration: "6 months",
        stipend: 16000,
        required_skills: &[
            "Healthcare",
            "Data Analysis",
            "Medical Research",
            "Statistics",
        ],
        description: "Support healthcare data analysis and medical research projects.",
        capacity: 40,
        affirmative_action_required: true,
    },
    Listing {
        id: "INT006",
        title: "Environmental Policy Intern",
        organization: "Ministry of Environment",
        sector: "Environment",
        location: "Pune",
        duration: "6 months",
        stipend: 14000,
        required_skills: &[
            "Environmental Science",
            "Policy Research",
            "Documentation",
            "GIS",
        ],
        description: "Research and develop environmental policies and sustainability initiatives.",
        capacity: 35,
        affirmative_action_required: true,
    },
    Listing {
        id: "INT007",
        title: "Cybersecurity Analyst Intern",
        organization: "National Cyber Security Centre",
        sector: "Cybersecurity",
        location: "Hyderabad",
        duration: "6 months",
        stipend: 22000,
        required_skills: &[
            "Cybersecurity",
            "Network Security",
            "Ethical Hacking",
            "Python",
        ],
        description: "Support cybersecurity initiatives and threat analysis.",
        capacity: 20,
        affirmative_action_required: false,
    },
    Listing {
        id: "INT008",
        title: "Education Technology Intern",
        organization: "Ministry of Education",
        sector: "Education",
        location: "Kolkata",
        duration: "6 months",
        stipend: 15000,
        required_skills: &[
            "Education Technology",
            "Content Development",
            "Learning Design",
            "Research",
        ],
        description: "Develop educational content and support digital learning initiatives.",
        capacity: 45,
        affirmative_action_required: true,
    },
];

/// The eight sample listings (INT001–INT008), all requiring undergraduate level.
#[must_use]
pub fn sample_internships() -> Vec<Internship> {
    LISTINGS
        .iter()
        .map(|l| Internship {
            id: InternshipId::new(l.id),
            title: l.title.to_string(),
            organization: l.organization.to_string(),
            sector: l.sector.to_string(),
            location: l.location.to_string(),
            duration: l.duration.to_string(),
            stipend: l.stipend,
            required_skills: l.required_skills.iter().map(ToString::to_string).collect(),
            education_requirement: "undergraduate".to_string(),
            description: l.description.to_string(),
            capacity: l.capacity,
            affirmative_action_required: l.affirmative_action_required,
        })
        .collect()
}
