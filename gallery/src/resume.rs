//! Static resume content: work history, skills, and education.
//!
//! Everything here is display copy, so records borrow `'static` strings
//! instead of allocating. Entries are ordered most recent first.

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

/// One work-history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

/// A named group of skill chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

/// A degree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

/// About-me prose as markdown: two paragraphs and a pull-quote.
pub const ABOUT_MARKDOWN: &str = "\
I was born and raised in Los Angeles to immigrant parents, and that experience \
shapes everything I build. I crossed the country to attend college, studied \
computer science and government, and came back home determined to use software \
to expand opportunity for people who never had it.

A lot of people sacrificed for me to be here. Because of that, I'm obsessed \
with building tools that remove barriers: helping people become healthier \
without needing expensive trainers, helping communities understand and \
influence their government without millions of dollars in lobbying, and making \
it easier for regular people to learn, grow, and win.

> Whether it's a habit-tracking app, a civic engagement platform like RepMe, \
or internal dashboards that unlock small business efficiency, my work is \
guided by the same goal: use my skills as a software engineer to push society \
higher — especially the community I come from.";

/// Work history, most recent first.
pub const EXPERIENCES: [Experience; 4] = [
    Experience {
        role: "Technical Operations Manager",
        company: "SportscarLA",
        period: "Jun 2025 – Present",
        bullets: &[
            "Performed ongoing software updates and modifications to internal systems, improving \
             reliability of pricing workflows by 30%.",
            "Automated 5+ workflows (sticker gen, cross-platform listings, reply templates) cutting \
             per-vehicle admin steps and improving time-to-list by 67% (Python/Sheets + SOPs).",
            "Collaborated with operations to align tooling updates with dealership processes and \
             growth goals.",
        ],
    },
    Experience {
        role: "Instructor - Robotics & Coding",
        company: "Keep Youth Doing Something (KYDS)",
        period: "Oct 2024 – May 2025",
        bullets: &[
            "Delivered 50+ labs on software logic, debugging, and iterative system refinement, \
             increasing engagement by 19%.",
            "Guided students through identifying and debugging software issues, testing software \
             behavior, and refining system logic through iterative development.",
            "Created supportive learning environments that connected coding concepts to real-world \
             applications.",
        ],
    },
    Experience {
        role: "Research Software Engineer",
        company: "North Atlantic Treaty Organization (NATO)",
        period: "Aug 2021 – May 2024",
        bullets: &[
            "Created technical models and diagrams (API flows, schema maps, data pipelines) used by \
             developers during system updates and long-term maintenance.",
            "Implemented validation scripts and CI checks to enforce API/ETL spec compliance and \
             automate software updates.",
            "Researched, analyzed, and documented software system behaviors for multinational \
             engineering teams; produced API, schema, and data-pipeline documentation for long-term \
             maintenance.",
        ],
    },
    Experience {
        role: "Software Engineer/PM",
        company: "CommonWheel",
        period: "Feb 2023 – May 2023",
        bullets: &[
            "Analyzed user and business needs and translated them into technical specs, models, and \
             acceptance criteria for app development.",
            "Maintained documentation and decision logs supporting future system updates, debugging, \
             and long-term maintainability.",
            "Participated in SDLC planning, prioritization, and refinement to ensure changes met \
             functionality, reliability, and security needs.",
        ],
    },
];

/// Skill chips grouped for the two-column grid.
pub const SKILL_GROUPS: [SkillGroup; 5] = [
    SkillGroup {
        name: "Languages",
        items: &["JavaScript", "TypeScript", "Python", "Java", "C++"],
    },
    SkillGroup {
        name: "Frontend",
        items: &["React", "Next.js", "Tailwind CSS", "Framer Motion", "HTML/CSS"],
    },
    SkillGroup {
        name: "Backend",
        items: &["Node.js", "Express", "MongoDB", "Mongoose", "PostgreSQL"],
    },
    SkillGroup {
        name: "DevOps / Tools",
        items: &["Git", "GitHub", "AWS (basic)", "Vercel", "Render", "Docker"],
    },
    SkillGroup {
        name: "Other",
        items: &["Figma", "Photography", "Teaching/Instruction", "Product Management"],
    },
];

/// Education entries.
pub const EDUCATION: [Education; 1] = [Education {
    school: "Franklin & Marshall College",
    degree: "Bachelor's Degree",
    period: "2018 – 2022",
    highlights: &[
        "Double Major: Computer Science & Government",
        "Active in student leadership and technology organizations",
        "Focused on intersection of technology and public policy",
    ],
}];
