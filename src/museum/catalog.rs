//! Floor plan and exhibits on display
//!
//! Rooms are listed in floor plan order. The catalog is also the record of
//! which rooms and modals actually exist: navigation to anything else is a
//! silent no-op for the presentation layer.

use crate::consts::cli_consts::{AVATAR_MODAL, ENTRANCE_ROOM, EXHIBIT_MODAL};

/// What activating a frame does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameAction {
    OpenExhibit {
        title: &'static str,
        description: &'static str,
        link: Option<&'static str>,
    },
    OpenAvatar,
    CopyEmail(&'static str),
    DownloadResume,
    GoToRoom(&'static str),
}

/// A selectable item hanging in a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub label: &'static str,
    pub caption: &'static str,
    pub action: FrameAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub frames: Vec<Frame>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    rooms: Vec<RoomSpec>,
    modals: Vec<&'static str>,
}

impl Catalog {
    pub fn new(rooms: Vec<RoomSpec>, modals: Vec<&'static str>) -> Self {
        Self { rooms, modals }
    }

    /// The portfolio on display.
    pub fn portfolio() -> Self {
        let rooms = vec![
            RoomSpec {
                id: ENTRANCE_ROOM,
                title: "Entrance Hall",
                tagline: "Welcome to my portfolio museum. Pick a wing to explore.",
                frames: vec![
                    frame("Meet the Curator", "Who built this place", FrameAction::OpenAvatar),
                    frame("Project Gallery", "Walk to the projects wing", FrameAction::GoToRoom("projects")),
                    frame("Skills Wing", "Tools and languages", FrameAction::GoToRoom("skills")),
                    frame("Contact Desk", "Get in touch", FrameAction::GoToRoom("contact")),
                ],
            },
            RoomSpec {
                id: "about",
                title: "About Me",
                tagline: "A student developer who likes building useful things.",
                frames: vec![
                    frame("Portrait", "Open the curator card", FrameAction::OpenAvatar),
                    frame("Timeline", "From first website to ERP systems", FrameAction::GoToRoom("projects")),
                ],
            },
            RoomSpec {
                id: "projects",
                title: "Project Gallery",
                tagline: "Each frame is a project. Open one to read its placard.",
                frames: vec![
                    exhibit(
                        "ERP System",
                        "Inventory, billing and payroll modules sharing one database, with role-based access for staff.",
                        None,
                    ),
                    exhibit(
                        "E-Commerce Store",
                        "Product catalog, cart and checkout flow with order tracking.",
                        None,
                    ),
                    exhibit(
                        "My First Website",
                        "A hand-written HTML and CSS page that started it all.",
                        None,
                    ),
                    exhibit(
                        "AI Chatbot",
                        "A conversational assistant answering course questions.",
                        None,
                    ),
                    exhibit(
                        "Mini ERP System",
                        "A lightweight ERP for small shops: stock, sales and reports.",
                        None,
                    ),
                ],
            },
            RoomSpec {
                id: "skills",
                title: "Skills Wing",
                tagline: "Languages, frameworks and tools on permanent display.",
                frames: vec![
                    frame("Frontend", "HTML, CSS, JavaScript", FrameAction::GoToRoom("projects")),
                    frame("Backend", "Databases and REST APIs", FrameAction::GoToRoom("projects")),
                    frame("Tooling", "Git, terminals, editors", FrameAction::GoToRoom("contact")),
                ],
            },
            RoomSpec {
                id: "contact",
                title: "Contact Desk",
                tagline: "Leave a note at the front desk.",
                frames: vec![
                    frame(
                        "Email",
                        "Copy the address to your clipboard",
                        FrameAction::CopyEmail("curator@portfolio-museum.dev"),
                    ),
                    frame("Resume", "Request a copy of the resume", FrameAction::DownloadResume),
                    frame("Back to Entrance", "Return to the hall", FrameAction::GoToRoom(ENTRANCE_ROOM)),
                ],
            },
        ];
        Self::new(rooms, vec![AVATAR_MODAL, EXHIBIT_MODAL])
    }

    pub fn rooms(&self) -> &[RoomSpec] {
        &self.rooms
    }

    pub fn room(&self, id: &str) -> Option<&RoomSpec> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn has_room(&self, id: &str) -> bool {
        self.room(id).is_some()
    }

    pub fn has_modal(&self, id: &str) -> bool {
        self.modals.contains(&id)
    }

    pub fn room_index(&self, id: &str) -> Option<usize> {
        self.rooms.iter().position(|room| room.id == id)
    }

    /// Room `offset` steps away on the floor plan, wrapping around.
    ///
    /// An unknown starting room counts as the entrance position.
    pub fn neighbor(&self, id: &str, offset: isize) -> Option<&RoomSpec> {
        if self.rooms.is_empty() {
            return None;
        }
        let len = self.rooms.len() as isize;
        let index = self.room_index(id).unwrap_or(0) as isize;
        let target = (index + offset).rem_euclid(len) as usize;
        self.rooms.get(target)
    }
}

fn frame(label: &'static str, caption: &'static str, action: FrameAction) -> Frame {
    Frame {
        label,
        caption,
        action,
    }
}

fn exhibit(title: &'static str, description: &'static str, link: Option<&'static str>) -> Frame {
    Frame {
        label: title,
        caption: super::exhibit::category_for_title(title),
        action: FrameAction::OpenExhibit {
            title,
            description,
            link,
        },
    }
}
