//! Level titles
//!
//! Captions the character by level. The sheet's own numeric fields stay
//! authoritative; this ladder only supplies the flavor title.

/// A rung on the title ladder
#[derive(Debug, Clone)]
pub struct LevelTitle {
    pub min_level: u32,
    pub title: &'static str,
}

/// Title ladder, sorted by min_level
pub static TITLES: &[LevelTitle] = &[
    LevelTitle {
        min_level: 1,
        title: "Code Novice",
    },
    LevelTitle {
        min_level: 5,
        title: "Script Squire",
    },
    LevelTitle {
        min_level: 10,
        title: "Full-Stack Adventurer",
    },
    LevelTitle {
        min_level: 15,
        title: "Framework Knight",
    },
    LevelTitle {
        min_level: 20,
        title: "Stack Sorcerer",
    },
    LevelTitle {
        min_level: 30,
        title: "Fullstack Sovereign",
    },
];

impl LevelTitle {
    /// Title for a given level. Total: levels below the ladder get the first
    /// rung, levels past the last rung keep its title.
    pub fn for_level(level: u32) -> &'static str {
        TITLES
            .iter()
            .rev()
            .find(|t| level >= t.min_level)
            .unwrap_or(&TITLES[0])
            .title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_for_level() {
        assert_eq!(LevelTitle::for_level(0), "Code Novice");
        assert_eq!(LevelTitle::for_level(1), "Code Novice");
        assert_eq!(LevelTitle::for_level(12), "Full-Stack Adventurer");
        assert_eq!(LevelTitle::for_level(30), "Fullstack Sovereign");
        assert_eq!(LevelTitle::for_level(99), "Fullstack Sovereign");
    }
}
