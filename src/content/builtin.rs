//! The built-in sample content set
//!
//! Hand-authored and assumed consistent; the lint pass double-checks it in
//! tests. A content file, when present, replaces this wholesale.

use once_cell::sync::Lazy;

use crate::domain::{
    CharacterSheet, Difficulty, Equipment, HeaderStats, NodeKind, PathNode, Quest, QuestStatus,
    Rarity, SlotKind, StatBlock,
};

use super::Content;

pub static BUILTIN: Lazy<Content> = Lazy::new(build);

#[allow(clippy::too_many_arguments)]
fn quest(
    id: &str,
    title: &str,
    description: &str,
    module: &str,
    difficulty: Difficulty,
    xp_reward: u32,
    estimated_time: &str,
    status: QuestStatus,
    technologies: &[&str],
) -> Quest {
    Quest {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        module: module.to_string(),
        difficulty,
        xp_reward,
        estimated_time: estimated_time.to_string(),
        status,
        progress: None,
        prerequisites: Vec::new(),
        technologies: technologies.iter().map(|s| s.to_string()).collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn node(
    id: &str,
    title: &str,
    description: &str,
    kind: NodeKind,
    status: QuestStatus,
    progress: u8,
    quests_total: u32,
    quests_completed: u32,
    xp_reward: u32,
    required_level: Option<u32>,
    technologies: &[&str],
    unlocks: &[&str],
) -> PathNode {
    PathNode {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        kind,
        status,
        progress,
        quests_total,
        quests_completed,
        xp_reward,
        required_level,
        technologies: technologies.iter().map(|s| s.to_string()).collect(),
        unlocks: unlocks.iter().map(|s| s.to_string()).collect(),
    }
}

fn build() -> Content {
    let mut quests = vec![
        quest(
            "1",
            "HTML Foundations",
            "Master the building blocks of the web with semantic HTML elements and structure.",
            "Frontend Basics",
            Difficulty::Beginner,
            100,
            "30 min",
            QuestStatus::Completed,
            &["HTML", "Semantic Tags"],
        ),
        quest(
            "2",
            "CSS Styling Mastery",
            "Learn to style your HTML with CSS, including flexbox and grid layouts.",
            "Frontend Basics",
            Difficulty::Beginner,
            150,
            "45 min",
            QuestStatus::Completed,
            &["CSS", "Flexbox", "Grid"],
        ),
        quest(
            "3",
            "JavaScript Fundamentals",
            "Dive into programming logic, variables, functions, and DOM manipulation.",
            "Frontend Basics",
            Difficulty::Intermediate,
            200,
            "60 min",
            QuestStatus::InProgress,
            &["JavaScript", "DOM", "ES6"],
        ),
        quest(
            "4",
            "React Component Architecture",
            "Build dynamic user interfaces with React components and hooks.",
            "Frontend Frameworks",
            Difficulty::Intermediate,
            250,
            "90 min",
            QuestStatus::Available,
            &["React", "JSX", "Hooks"],
        ),
        quest(
            "5",
            "State Management with Redux",
            "Master complex application state with Redux and middleware.",
            "Frontend Frameworks",
            Difficulty::Advanced,
            300,
            "120 min",
            QuestStatus::Locked,
            &["Redux", "Middleware", "Actions"],
        ),
        quest(
            "6",
            "Node.js Backend Setup",
            "Create your first server with Node.js and Express framework.",
            "Backend Development",
            Difficulty::Intermediate,
            200,
            "75 min",
            QuestStatus::Available,
            &["Node.js", "Express", "REST API"],
        ),
    ];
    quests[2].progress = Some(65);
    quests[3].prerequisites = vec!["JavaScript Fundamentals".to_string()];
    quests[4].prerequisites = vec!["React Component Architecture".to_string()];

    let path = vec![
        node(
            "html_basics",
            "HTML Foundations",
            "Master the structure and semantics of web pages",
            NodeKind::Module,
            QuestStatus::Completed,
            100,
            8,
            8,
            500,
            None,
            &["HTML5", "Semantic Tags", "Accessibility"],
            &["css_styling"],
        ),
        node(
            "css_styling",
            "CSS Mastery",
            "Style and layout your web applications beautifully",
            NodeKind::Module,
            QuestStatus::Completed,
            100,
            12,
            12,
            750,
            None,
            &["CSS3", "Flexbox", "Grid", "Animations"],
            &["frontend_boss"],
        ),
        node(
            "frontend_boss",
            "Frontend Guardian",
            "Prove your HTML & CSS mastery in epic battle!",
            NodeKind::BossBattle,
            QuestStatus::Completed,
            100,
            1,
            1,
            1000,
            Some(5),
            &["HTML", "CSS", "Responsive Design"],
            &["javascript_core"],
        ),
        node(
            "javascript_core",
            "JavaScript Fundamentals",
            "Bring your websites to life with programming",
            NodeKind::Module,
            QuestStatus::InProgress,
            65,
            15,
            10,
            1200,
            None,
            &["ES6+", "DOM", "Events", "Async/Await"],
            &["react_basics"],
        ),
        node(
            "react_basics",
            "React Fundamentals",
            "Build dynamic user interfaces with React",
            NodeKind::Module,
            QuestStatus::Available,
            0,
            10,
            0,
            1500,
            None,
            &["React", "JSX", "Hooks", "State Management"],
            &["frontend_master_boss"],
        ),
        node(
            "frontend_master_boss",
            "Frontend Archmage",
            "Face the ultimate frontend challenge!",
            NodeKind::BossBattle,
            QuestStatus::Locked,
            0,
            1,
            0,
            2500,
            Some(15),
            &["React", "JavaScript", "CSS", "Performance"],
            &["nodejs_backend"],
        ),
        node(
            "nodejs_backend",
            "Backend with Node.js",
            "Create powerful server-side applications",
            NodeKind::Module,
            QuestStatus::Locked,
            0,
            12,
            0,
            1800,
            None,
            &["Node.js", "Express", "REST APIs", "Middleware"],
            &["databases"],
        ),
        node(
            "databases",
            "Database Mastery",
            "Store and manage data efficiently",
            NodeKind::Module,
            QuestStatus::Locked,
            0,
            10,
            0,
            1600,
            None,
            &["SQL", "MongoDB", "Prisma", "Relationships"],
            &["fullstack_boss"],
        ),
        node(
            "fullstack_boss",
            "Fullstack Sovereign",
            "The ultimate test of full-stack mastery!",
            NodeKind::BossBattle,
            QuestStatus::Locked,
            0,
            1,
            0,
            5000,
            Some(30),
            &["React", "Node.js", "Databases", "Deployment"],
            &[],
        ),
    ];

    let character = CharacterSheet {
        level: 12,
        xp: 2350,
        xp_to_next: 3000,
        total_xp: 15750,
        quests_completed: 47,
        modules_completed: 8,
        equipment: vec![
            Equipment {
                id: "1".to_string(),
                name: "Mystic Code Crown".to_string(),
                slot: SlotKind::Helmet,
                rarity: Rarity::Epic,
                stats: StatBlock {
                    intelligence: 15,
                    creativity: 10,
                    debugging: 5,
                },
            },
            Equipment {
                id: "2".to_string(),
                name: "Syntax Slasher".to_string(),
                slot: SlotKind::Sword,
                rarity: Rarity::Rare,
                stats: StatBlock {
                    intelligence: 8,
                    creativity: 12,
                    debugging: 15,
                },
            },
            Equipment {
                id: "3".to_string(),
                name: "Armor of Algorithms".to_string(),
                slot: SlotKind::Armor,
                rarity: Rarity::Legendary,
                stats: StatBlock {
                    intelligence: 20,
                    creativity: 15,
                    debugging: 20,
                },
            },
        ],
        total_stats: StatBlock {
            intelligence: 87,
            creativity: 64,
            debugging: 92,
        },
    };

    let header = HeaderStats {
        level: 12,
        xp: 2350,
        xp_to_next: 3000,
        streak: 7,
        total_quests: 47,
        weekly_xp: 1250,
    };

    Content {
        header,
        character,
        path,
        quests,
        recent_achievements: vec![
            "🏆 CSS Master".to_string(),
            "⚡ JavaScript Ninja".to_string(),
            "🛡 React Defender".to_string(),
        ],
    }
}
