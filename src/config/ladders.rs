use serde::Serialize;

/// A ranked ladder on Voobly
///
/// The id is the last path segment of a ladder's ratings page, e.g.
/// `https://www.voobly.com/profile/view/{uid}/Ratings/games/profile/{uid}/131`
/// is the "RM - 1v1" ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ladder {
    pub id: u32,
    pub name: &'static str,
}

impl Ladder {
    pub fn new(id: u32, name: &'static str) -> Self {
        Self { id, name }
    }
}

/// Ladders scraped when none are selected on the command line
pub const DEFAULT_LADDERS: [&str; 2] = ["RM - 1v1", "RM - Team Games"];

/// Fixed set of ladders that can be requested
#[derive(Debug, Clone)]
pub struct LadderCatalog {
    ladders: Vec<Ladder>,
}

impl LadderCatalog {
    pub fn new(ladders: Vec<Ladder>) -> Self {
        Self { ladders }
    }

    /// The ranked ladders Voobly hosts
    pub fn voobly() -> Self {
        Self::new(vec![
            Ladder::new(14, "RM - Clans"),
            Ladder::new(100, "CS - Europe"),
            Ladder::new(101, "Beginners RM"),
            Ladder::new(102, "Beginners DM"),
            Ladder::new(131, "RM - 1v1"),
            Ladder::new(132, "RM - Team Games"),
            Ladder::new(143, "RM AoFE"),
            Ladder::new(144, "AoFE Overall"),
            Ladder::new(145, "AoFE RM - 1v1"),
            Ladder::new(146, "AoFE RM - TG"),
            Ladder::new(148, "VCOM Clan Wars"),
            Ladder::new(149, "AoFE Castle Blood"),
            Ladder::new(150, "AoFE CS"),
            Ladder::new(151, "VCOM Ladder"),
            Ladder::new(162, "DM TG"),
            Ladder::new(163, "DM 1v1"),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&Ladder> {
        self.ladders.iter().find(|ladder| ladder.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ladder> {
        self.ladders.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.ladders.iter().map(|ladder| ladder.name).collect()
    }

    /// Map selected names to ladders, keeping the selection order.
    /// An empty selection falls back to [`DEFAULT_LADDERS`].
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> anyhow::Result<Vec<Ladder>> {
        if names.is_empty() {
            return self.resolve(&DEFAULT_LADDERS);
        }

        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("Unknown ladder: '{}'", name))
            })
            .collect()
    }
}

impl Default for LadderCatalog {
    fn default() -> Self {
        Self::voobly()
    }
}
