//! Hand-authored site content. Every section of the page is a declarative
//! view over these arrays; nothing here is loaded or mutated at runtime.

pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    pub email: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Ruchira Sarkar",
    title: "Frontend Software Engineer",
    tagline: "Building privacy-first, adaptive interfaces. Turning behavioral insights into elegant user experiences.",
    about: "I'm a Frontend Software Engineer passionate about building privacy-first, adaptive user interfaces. \
            With expertise in React, TypeScript, and browser APIs, I create intelligent UX systems that respond \
            to user behavior while maintaining complete privacy. I believe in technology that supports human \
            wellbeing without compromising autonomy or data security.",
    github_url: "https://github.com/RuchiraSarkarDeveloper",
    linkedin_url: "https://www.linkedin.com/in/ruchira-sarkar-313227392/",
    email: "ruchirasarkar57@gmail.com",
};

pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", anchor: "about" },
    NavLink { label: "Education", anchor: "education" },
    NavLink { label: "Skills", anchor: "skills" },
    NavLink { label: "Projects", anchor: "projects" },
    NavLink { label: "Certifications", anchor: "certifications" },
    NavLink { label: "Contact", anchor: "contact" },
];

pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: &[Value] = &[
    Value {
        title: "Clean Code",
        description: "Writing maintainable, scalable solutions that stand the test of time",
    },
    Value {
        title: "Fast Execution",
        description: "Delivering high-performance applications with optimal user experience",
    },
    Value {
        title: "Problem Solving",
        description: "Breaking down complex challenges into elegant, simple solutions",
    },
    Value {
        title: "Team Player",
        description: "Collaborating effectively and mentoring others to grow together",
    },
];

pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EDUCATION: &[EducationEntry] = &[EducationEntry {
    degree: "Bachelor of Computer Application",
    institution: "NSHM Knowledge Campus",
    year: "Jul. 2024 \u{2013} Present",
    highlights: &[
        "Location: Kolkata, West Bengal",
        "Relevant Coursework: Data Structures, Web Design",
    ],
}];

pub struct SkillCategory {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        category: "Languages",
        skills: &["TypeScript", "JavaScript", "Python", "C"],
    },
    SkillCategory {
        category: "Frontend",
        skills: &[
            "React",
            "Next.js",
            "Astro",
            "HTML",
            "CSS",
            "Tailwind CSS",
            "Web Components",
            "PWAs",
            "Accessibility (WCAG)",
        ],
    },
    SkillCategory {
        category: "State & Design Systems",
        skills: &[
            "Design Systems",
            "Component Architecture",
            "UI State Modeling",
            "Theming",
            "Tokenization",
        ],
    },
    SkillCategory {
        category: "APIs & Data",
        skills: &["REST", "GraphQL", "Apollo", "Relay Modern"],
    },
    SkillCategory {
        category: "Tooling & Version Control",
        skills: &["Git", "GitHub", "GitLab", "npm", "Vite"],
    },
    SkillCategory {
        category: "Testing",
        skills: &["Jest", "Playwright", "Cypress"],
    },
    SkillCategory {
        category: "Performance & Web Platform",
        skills: &[
            "Lighthouse",
            "DevTools",
            "Service Workers",
            "Cache-Control",
            "Streaming Responses",
        ],
    },
    SkillCategory {
        category: "Security",
        skills: &["HTTPS", "CORS", "CSP", "OWASP Fundamentals"],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub tech: &'static [&'static str],
    pub challenge: &'static str,
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub category: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Cognitive Load Dashboard",
        description: "Frontend-only, privacy-first cognitive load engine analyzing 9 behavioral signals over a \
                      120s rolling window, generating a 0\u{2013}100 load score with confidence trends at < 1% CPU \
                      usage and 0 network calls.",
        impact: "Designed a 4-level adaptive interface framework with 10 autonomous AI mechanisms, reducing \
                 visual and decision complexity by 40\u{2013}65%, scaling typography up to 20%, and slowing \
                 animations by 30\u{2013}60% under high cognitive load.",
        tech: &["TypeScript", "React", "Zustand", "Browser APIs"],
        challenge: "Implemented predictive overload modeling (30\u{2013}90s), micro-recovery stabilization, and \
                    soft-failure mitigation using requestAnimationFrame sampling and passive listeners with \
                    fully in-memory execution and user-controlled transparency.",
        live_url: "https://cognitive-load-dashboard.vercel.app/",
        github_url: "https://github.com/RuchiraSarkarDeveloper/Cognitive-Load-Dashboard",
        category: "Frontend",
    },
    Project {
        title: "Digital Body Language Translator",
        description: "Behavioral-signal-driven UX intelligence layer with 12 real-time pattern detectors, \
                      delivering contextual cues at < 1% CPU utilization, sub-1ms event latency, and 0 content \
                      inspection or retention.",
        impact: "Introduced non-verbal adaptive interventions including impulse dampening (300\u{2013}500ms \
                 micro-delay), hesitation-aware pacing, confidence volatility signaling, and revision loop \
                 interruption, reducing premature sends by 35\u{2013}50% without limiting user autonomy.",
        tech: &["React", "TypeScript", "Tailwind CSS", "Browser APIs"],
        challenge: "Established a privacy-centric frontend architecture using in-memory rolling analysis (500ms \
                    granularity), 0 outbound requests, 165KB optimized bundle size, sustained 60FPS feedback, \
                    and full opt-in user governance for compliance readiness.",
        live_url: "https://digital-body-language-translator.vercel.app/",
        github_url: "https://github.com/RuchiraSarkarDeveloper/Digital-Body-Language-Translator",
        category: "Frontend",
    },
    Project {
        title: "Personal UX Genome",
        description: "Frontend-only personalization engine processing 10+ passive interaction signals to adapt \
                      UI behavior in real time, eliminating 100% of manual preferences, onboarding flows, and \
                      settings screens.",
        impact: "Orchestrated a rule-based adaptation layer driven by CSS variables and component logic, \
                 dynamically adjusting animation speed by 30\u{2013}60%, layout density by 25\u{2013}40%, and typography \
                 scale up to 20%. Applied a strict privacy architecture with 100% client-side execution, 0 \
                 network requests, 0 raw interaction logs stored, and sustained 60 FPS rendering at < 1% CPU \
                 usage.",
        tech: &["React", "Next.js", "TypeScript", "Zustand", "Tailwind CSS", "Browser APIs"],
        challenge: "Implemented a confidence-weighted trait inference pipeline using 120s rolling windows, decay \
                    functions, and stability thresholds, reducing abrupt UI changes by 85\u{2013}90% during \
                    behavioral fluctuation. Defined a portable UX genome schema with versioned JSON \
                    export/import, enabling consistent interaction behavior across applications with 0 data \
                    loss and full user ownership.",
        live_url: "https://personal-ux-genome.vercel.app/",
        github_url: "https://github.com/RuchiraSarkarDeveloper/Personal-UX-Genome",
        category: "Frontend",
    },
];

pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub credential_url: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "Python for Programmers",
        issuer: "IBM",
        year: "2025",
        credential_url: "https://skills.yourlearning.ibm.com/certificate/share/19081256caewogICJsZWFybmVyQ05VTSIgOiAiMzI5OTA4OVJFRyIsCiAgIm9iamVjdElkIiA6ICJVUkwtODA2QjhEOUIwN0ZEIiwKICAib2JqZWN0VHlwZSIgOiAiQUNUSVZJVFkiCn0dce1f158a8-10",
    },
    Certification {
        name: "Web Development Basics",
        issuer: "IBM",
        year: "2025",
        credential_url: "https://skills.yourlearning.ibm.com/certificate/share/19081256caewogICJsZWFybmVyQ05VTSIgOiAiMzI5OTA4OVJFRyIsCiAgIm9iamVjdElkIiA6ICJVUkwtODA2QjhEOUIwN0ZEIiwKICAib2JqZWN0VHlwZSIgOiAiQUNUSVZJVFkiCn0dce1f158a8-10",
    },
];
