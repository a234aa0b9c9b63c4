use once_cell::sync::Lazy;
use serde::Serialize;

/// Static profile/resume document consumed read-only by the page-rendering
/// layer. No validation or mutation; the rendering layer gets it verbatim.
#[derive(Debug, Serialize)]
pub struct ProfileData {
    pub profile: Profile,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub awards: Vec<Award>,
    pub skills: Vec<SkillCategory>,
}

#[derive(Debug, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub titles: &'static [&'static str],
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub bio: &'static str,
    pub social: Social,
}

#[derive(Debug, Serialize)]
pub struct Social {
    pub github: &'static str,
    pub linkedin: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Certification {
    pub name: &'static str,
    pub status: CertificationStatus,
    pub link: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CertificationStatus {
    Completed,
    InProgress,
}

#[derive(Debug, Serialize)]
pub struct Award {
    pub name: &'static str,
    pub place: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SkillCategory {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub static PROFILE_DATA: Lazy<ProfileData> = Lazy::new(|| ProfileData {
    profile: Profile {
        name: "Yomal Praveen",
        titles: &["Cyber Security Analyst", "Ethical Hacker"],
        email: "me@yomalpraveen.com",
        phone: "+94768731437",
        location: "Sri Lanka",
        bio: "Cyber Security Analyst with hands-on experience in threat detection, \
              incident response, and vulnerability assessment. Passionate about \
              offensive security and CTF competitions.",
        social: Social {
            github: "https://github.com/ReTr0ScR1Pt",
            linkedin: "https://www.linkedin.com/in/yomal-praveen-28239b216/",
        },
    },
    experience: vec![
        Experience {
            title: "Cyber Security Analyst - L2",
            company: "Halexo Pvt Ltd",
            period: "Jan 2025 - Present",
            description: "Created filters for alerts, logs, and traffic to reduce noise. \
                          Trained new analysts, investigated complex security incidents, \
                          conducted vulnerability scans using Rapid7, and enhanced security \
                          protocols to mitigate advanced cyber threats.",
        },
        Experience {
            title: "Associate Cyber Security Analyst",
            company: "Halexo Pvt Ltd",
            period: "Nov 2023 - Dec 2024",
            description: "Worked on a 24/7 roster using Stellar Cyber Portal (SIEM) to \
                          monitor for threats, investigate security alerts, and provide \
                          incident response.",
        },
        Experience {
            title: "SOC Analyst - Intern",
            company: "Nable Pvt Ltd",
            period: "Feb 2023 - Nov 2023",
            description: "Hands-on experience with IPS/IDS, EDR, and Firewall (Sentinel One, \
                          Imperva WAF, Crowdstrike). Produced daily threat analysis reports \
                          and monitored for attacks and unauthorized activities.",
        },
        Experience {
            title: "DevOps Engineer - Intern",
            company: "iLabs",
            period: "Dec 2021 - Jul 2022",
            description: "Managed AWS cloud-based production systems, ensuring availability, \
                          performance, scalability, and security while automating tasks with \
                          Bash.",
        },
    ],
    education: vec![
        Education {
            degree: "MSc in Cyber Security and Networking",
            institution: "Kingston University",
            period: "2025 - 2026",
        },
        Education {
            degree: "BSc (Hons) in Information Technology (Cyber Security)",
            institution: "Sri Lankan Institute of Information Technology (SLIIT)",
            period: "2021 - 2025",
        },
    ],
    projects: vec![
        Project {
            title: "AI-Powered Cybersecurity",
            description: "Hybrid CNN-LSTM-Attention model for cybersecurity threat detection \
                          and analysis using deep learning techniques.",
            tags: &["Python", "CNN", "LSTM", "Deep Learning", "Cybersecurity"],
            link: "https://github.com/ReTr0ScR1Pt/AI-Powered-Cybersecurity-with-Hybrid-CNN-LSTM-Attention",
        },
        Project {
            title: "Quantum Ledger",
            description: "A blockchain-based ledger system exploring quantum-resistant \
                          cryptography and secure transaction management.",
            tags: &["Blockchain", "Cryptography", "Security"],
            link: "https://github.com/ReTr0ScR1Pt/quantum-ledger",
        },
        Project {
            title: "Risk Management Report",
            description: "Led a team to develop a comprehensive Risk Assessment Report \
                          focused on cybersecurity using Octave Allegro methodology.",
            tags: &["Risk Assessment", "Octave Allegro", "Documentation"],
            link: "https://github.com/ReTr0ScR1Pt/Risk_management_report",
        },
        Project {
            title: "Ethical Webcam Monitor",
            description: "Python-based webcam monitoring application with user consent and \
                          real-time photo sharing via Telegram bot.",
            tags: &["Python", "Telegram API", "Privacy", "Automation"],
            link: "https://github.com/ReTr0ScR1Pt/WebCamBotPrivate",
        },
        Project {
            title: "ViT Finance Classification",
            description: "Vision Transformer (ViT) model for financial image classification, \
                          improving accuracy and data integrity in financial document \
                          processing.",
            tags: &["Python", "ViT", "Machine Learning", "Finance"],
            link: "https://github.com/ReTr0ScR1Pt/ViT_finance_image_classification",
        },
        Project {
            title: "Arch Linux Dotfiles",
            description: "Custom configuration files and dotfiles for Arch Linux setup, \
                          featuring personalized themes and workflow optimizations.",
            tags: &["Linux", "Arch", "Shell", "Customization"],
            link: "https://github.com/ReTr0ScR1Pt/ArchCustomDotFiles",
        },
        Project {
            title: "SC-200 Study Guide",
            description: "Comprehensive question bank and study materials for Microsoft \
                          SC-200 Security Operations Analyst certification.",
            tags: &["Microsoft", "SC-200", "Security", "Study Guide"],
            link: "https://github.com/ReTr0ScR1Pt/sc200-questions-guide",
        },
    ],
    certifications: vec![
        Certification {
            name: "INE Junior Penetration Tester (eJPT)",
            status: CertificationStatus::Completed,
            link: Some("https://certs.ine.com/d905afe2-a942-4112-97bb-3656aa7fcace"),
        },
        Certification {
            name: "INE Certified Cloud Associate (ICCA)",
            status: CertificationStatus::Completed,
            link: Some("https://certs.ine.com/b64d0525-0f61-49f5-bea5-a7661ff4fc93#acc.LTihp6ca"),
        },
        Certification {
            name: "Stellar Cyber Essentials Associate",
            status: CertificationStatus::Completed,
            link: Some("https://drive.google.com/file/d/1gwsF0i1DKpaSbin-WQPyMRXoAbXCIokW/view"),
        },
        Certification {
            name: "Foundation Level Threat Intelligence Analyst",
            status: CertificationStatus::Completed,
            link: None,
        },
        Certification {
            name: "TryHackMe PT1",
            status: CertificationStatus::Completed,
            link: Some("https://assets.tryhackme.com/certification-certificate/68b28b2650cd6d2a9498808f.pdf"),
        },
        Certification {
            name: "Fortinet NSE1",
            status: CertificationStatus::Completed,
            link: Some("https://drive.google.com/file/d/1ugkVtHhzCxN9xqpBeJFo4tB_ZQ1CYc0_/view"),
        },
        Certification {
            name: "Fortinet NSE2",
            status: CertificationStatus::Completed,
            link: Some("https://drive.google.com/drive/u/0/folders/17lpHIRD_NG6bh3x37jOo6HLra1Hst6gD"),
        },
        Certification {
            name: "Python for Beginners - UoM",
            status: CertificationStatus::Completed,
            link: Some("https://open.uom.lk/lms/mod/customcert/verify_certificate.php"),
        },
        Certification {
            name: "Advent of Cyber 2024 - THM",
            status: CertificationStatus::Completed,
            link: None,
        },
        Certification {
            name: "Ethical Practical Hacker - TCM",
            status: CertificationStatus::InProgress,
            link: None,
        },
        Certification {
            name: "CompTIA CySA+",
            status: CertificationStatus::InProgress,
            link: None,
        },
        Certification {
            name: "Microsoft SC-200",
            status: CertificationStatus::InProgress,
            link: None,
        },
    ],
    awards: vec![
        Award {
            name: "Medusa CTF",
            place: "2nd Place",
        },
        Award {
            name: "HashX CTF",
            place: "3rd Place",
        },
        Award {
            name: "SLIIT Codefest",
            place: "3rd Place",
        },
    ],
    skills: vec![
        SkillCategory {
            category: "Security Tools",
            items: &[
                "Metasploit",
                "Burp Suite",
                "Nmap",
                "Wireshark",
                "Nessus",
                "Rapid7",
                "Acunetix",
                "OWASP ZAP",
            ],
        },
        SkillCategory {
            category: "SIEM & EDR",
            items: &["Stellar Cyber", "Sentinel One", "CrowdStrike", "Imperva WAF"],
        },
        SkillCategory {
            category: "Cloud & DevOps",
            items: &["AWS", "Docker", "Bash", "Linux (Kali, Arch)"],
        },
        SkillCategory {
            category: "Development",
            items: &["Python", "TypeScript", "React", "Next.js", "Node.js"],
        },
    ],
});
