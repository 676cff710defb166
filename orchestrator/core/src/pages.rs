//! Page Content
//!
//! Static content of the themed pages plus the little bit of state two of them
//! carry: the Design Studio's project explorer and the Cinematic Mind's film
//! strip. Surfaces decide how any of this looks.

use crate::planets::PlanetId;

/// Label of the control returning to `/`
pub const BACK_TO_GALAXY: &str = "← Back to Galaxy";

/// Title and tagline of a page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageContent {
    /// Heading
    pub title: &'static str,
    /// One-line description
    pub tagline: &'static str,
}

/// Content for a planet's page
#[must_use]
pub fn content_for(planet: PlanetId) -> PageContent {
    match planet {
        PlanetId::Design => PageContent {
            title: "Design Studio 🎨",
            tagline: "Explore my design projects and technical categories in the EXPLORER MENU on the left.",
        },
        PlanetId::Film => PageContent {
            title: "Cinematic Mind 🎬",
            tagline: "Your universe of photography and videography awaits.",
        },
        PlanetId::Soul => PageContent {
            title: "Soul & Logic 🌱",
            tagline: "This is your digital garden of philosophy and healing insights.",
        },
        PlanetId::Code => PageContent {
            title: "Learner Terminal 💻",
            tagline: "The code editor where you log your learning and projects.",
        },
        PlanetId::Lab => PageContent {
            title: "Sokka Lab 🧠",
            tagline: "Your zone for research, deep dives, and experimental ideas.",
        },
    }
}

// ============================================================================
// Design Studio explorer
// ============================================================================

/// Kind of explorer entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Collapsible folder
    Folder,
    /// Selectable file
    File,
}

/// One row of the project explorer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Folder or file
    pub kind: EntryKind,
    /// Parent folder id (files inside folders)
    pub parent: Option<&'static str>,
    /// Whether selecting this file opens the viewport panel
    pub has_viewport: bool,
}

const fn folder(id: &'static str, name: &'static str) -> ProjectEntry {
    ProjectEntry {
        id,
        name,
        kind: EntryKind::Folder,
        parent: None,
        has_viewport: false,
    }
}

const fn file(
    id: &'static str,
    name: &'static str,
    parent: Option<&'static str>,
    has_viewport: bool,
) -> ProjectEntry {
    ProjectEntry {
        id,
        name,
        kind: EntryKind::File,
        parent,
        has_viewport,
    }
}

/// Id of the readme shown when nothing else is selected
pub const README_ID: &str = "readme";

/// The design project tree
pub static PROJECTS: [ProjectEntry; 15] = [
    file(README_ID, "📄 Readme.md", None, false),
    folder("case-studies", "📁 Case-Studies"),
    file("case1", "├── Comprehensive_Kreedo.md", Some("case-studies"), true),
    folder("ui-ux", "📁 UI-UX-Design"),
    file("ui1", "├── Kreedo_6T_Parent_App.tsx", Some("ui-ux"), true),
    file("ui2", "├── Practico_Games_App.jsx", Some("ui-ux"), true),
    folder("visual", "📁 Visual-Asset-Design"),
    file("vis1", "├── Game_Visualizations.glb", Some("visual"), true),
    file("vis2", "└── Visual_Style_Guide.css", Some("visual"), true),
    folder("graphic", "📁 Graphic-Print-Media"),
    file("graph1", "├── Curriculum_Book_Design.pdf", Some("graphic"), false),
    file("graph2", "└── Social_Media_Creatives.jpg", Some("graphic"), true),
    folder("team", "📁 Team-Leadership"),
    file("team1", "├── Functional_Lead_Process.md", Some("team"), false),
    file("team2", "└── Vendor_Management_Log.txt", Some("team"), false),
];

/// Footer lines of the Design Studio terminal panel
pub const DESIGN_MANIFESTO: [&str; 2] = [
    "$ Sokka's Design Manifesto",
    "const designPhilosophy = (\"Yeah, I don’t know the language — but hey, that doesn’t mean I’m an idiot!\");",
];

/// Explorer state: open folders, active file, keyboard cursor
#[derive(Clone, Debug)]
pub struct DesignExplorer {
    open: Vec<&'static str>,
    active: &'static str,
    cursor: usize,
}

impl Default for DesignExplorer {
    fn default() -> Self {
        Self {
            open: Vec::new(),
            active: README_ID,
            cursor: 0,
        }
    }
}

impl DesignExplorer {
    /// All folders closed, readme active
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a folder is expanded
    #[must_use]
    pub fn is_open(&self, folder_id: &str) -> bool {
        self.open.iter().any(|f| *f == folder_id)
    }

    /// Entries currently shown (children of closed folders are hidden)
    #[must_use]
    pub fn visible(&self) -> Vec<&'static ProjectEntry> {
        PROJECTS
            .iter()
            .filter(|e| e.parent.map_or(true, |p| self.is_open(p)))
            .collect()
    }

    /// Click an entry: folders toggle, files become active
    pub fn click(&mut self, id: &str) {
        let Some(entry) = PROJECTS.iter().find(|e| e.id == id) else {
            return;
        };
        match entry.kind {
            EntryKind::Folder => {
                if let Some(pos) = self.open.iter().position(|f| *f == entry.id) {
                    self.open.remove(pos);
                } else {
                    self.open.push(entry.id);
                }
            }
            EntryKind::File => self.active = entry.id,
        }
        let visible_len = self.visible().len();
        self.cursor = self.cursor.min(visible_len.saturating_sub(1));
    }

    /// Move the keyboard cursor by `delta` rows (clamped)
    pub fn move_cursor(&mut self, delta: isize) {
        let max = self.visible().len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
    }

    /// Click whatever the cursor is on
    pub fn activate_cursor(&mut self) {
        if let Some(entry) = self.visible().get(self.cursor) {
            let id = entry.id;
            self.click(id);
        }
    }

    /// Row index of the keyboard cursor
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The active file
    #[must_use]
    pub fn active(&self) -> &'static ProjectEntry {
        PROJECTS
            .iter()
            .find(|e| e.id == self.active)
            .unwrap_or(&PROJECTS[0])
    }

    /// Whether the viewport panel is shown next to the rationale
    #[must_use]
    pub fn shows_viewport(&self) -> bool {
        self.active().has_viewport
    }
}

// ============================================================================
// Cinematic Mind film strip
// ============================================================================

/// One frame of the film strip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilmFrame {
    /// Stable identifier
    pub id: &'static str,
    /// Caption
    pub title: &'static str,
    /// Image asset reference
    pub image: &'static str,
}

/// Frames of the photography reel
pub static FILM_FRAMES: [FilmFrame; 5] = [
    FilmFrame { id: "prod", title: "Product Photography", image: "Placeholder1.jpg" },
    FilmFrame { id: "preschool", title: "Preschool Photography", image: "Placeholder2.jpg" },
    FilmFrame { id: "event", title: "Event Photography", image: "Placeholder3.jpg" },
    FilmFrame { id: "360", title: "360-Degree Photography", image: "Placeholder4.jpg" },
    FilmFrame { id: "post", title: "Post-Processing Skills", image: "Placeholder5.jpg" },
];

/// Film strip with a highlighted frame and an optionally opened one
#[derive(Clone, Debug, Default)]
pub struct FilmStrip {
    highlighted: usize,
    opened: Option<usize>,
}

impl FilmStrip {
    /// Strip with the first frame highlighted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the highlight, wrapping around the reel
    pub fn step(&mut self, forward: bool) {
        let len = FILM_FRAMES.len();
        self.highlighted = if forward {
            (self.highlighted + 1) % len
        } else {
            (self.highlighted + len - 1) % len
        };
    }

    /// Open the highlighted frame (a frame click)
    pub fn open_highlighted(&mut self) {
        self.opened = Some(self.highlighted);
    }

    /// Highlight and open frame `index`; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < FILM_FRAMES.len() {
            self.highlighted = index;
            self.opened = Some(index);
        }
    }

    /// Close the opened frame
    pub fn close(&mut self) {
        self.opened = None;
    }

    /// Highlighted frame index
    #[must_use]
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// The opened frame, if any
    #[must_use]
    pub fn opened(&self) -> Option<&'static FilmFrame> {
        self.opened.and_then(|i| FILM_FRAMES.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_planet_has_content() {
        for id in PlanetId::ALL {
            let content = content_for(id);
            assert!(!content.title.is_empty());
            assert!(!content.tagline.is_empty());
        }
    }

    #[test]
    fn test_explorer_starts_collapsed_on_readme() {
        let explorer = DesignExplorer::new();
        let visible: Vec<_> = explorer.visible().iter().map(|e| e.id).collect();
        assert_eq!(
            visible,
            vec![README_ID, "case-studies", "ui-ux", "visual", "graphic", "team"]
        );
        assert_eq!(explorer.active().id, README_ID);
        assert!(!explorer.shows_viewport());
    }

    #[test]
    fn test_folder_toggle_reveals_children() {
        let mut explorer = DesignExplorer::new();
        explorer.click("ui-ux");
        assert!(explorer.is_open("ui-ux"));
        let ids: Vec<_> = explorer.visible().iter().map(|e| e.id).collect();
        assert!(ids.contains(&"ui1"));
        assert!(ids.contains(&"ui2"));

        explorer.click("ui-ux");
        assert!(!explorer.is_open("ui-ux"));
        assert!(!explorer.visible().iter().any(|e| e.id == "ui1"));
    }

    #[test]
    fn test_file_selection_controls_viewport() {
        let mut explorer = DesignExplorer::new();
        explorer.click("vis1");
        assert_eq!(explorer.active().id, "vis1");
        assert!(explorer.shows_viewport());

        explorer.click("team1");
        assert!(!explorer.shows_viewport());

        explorer.click("does-not-exist");
        assert_eq!(explorer.active().id, "team1");
    }

    #[test]
    fn test_keyboard_cursor() {
        let mut explorer = DesignExplorer::new();
        explorer.move_cursor(-3);
        assert_eq!(explorer.cursor(), 0);

        explorer.move_cursor(1);
        explorer.activate_cursor();
        assert!(explorer.is_open("case-studies"));

        explorer.move_cursor(1);
        explorer.activate_cursor();
        assert_eq!(explorer.active().id, "case1");

        explorer.move_cursor(100);
        assert_eq!(explorer.cursor(), explorer.visible().len() - 1);
    }

    #[test]
    fn test_film_strip_wraps() {
        let mut strip = FilmStrip::new();
        strip.step(false);
        assert_eq!(strip.highlighted(), FILM_FRAMES.len() - 1);
        strip.step(true);
        assert_eq!(strip.highlighted(), 0);

        strip.open_highlighted();
        assert_eq!(strip.opened().map(|f| f.id), Some("prod"));
        strip.close();
        assert!(strip.opened().is_none());
    }

    #[test]
    fn test_film_select_ignores_out_of_range() {
        let mut strip = FilmStrip::new();
        strip.select(3);
        assert_eq!(strip.highlighted(), 3);
        assert_eq!(strip.opened().map(|f| f.id), Some("360"));
        strip.select(9);
        assert_eq!(strip.highlighted(), 3);
    }
}
