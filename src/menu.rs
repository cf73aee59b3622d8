//! State behind the certificate menu shown on certificate pages.

/// Direction the preview panel wipes in from. Cycles by item index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewVariant {
    FromBottom,
    FromRight,
    FromLeft,
}

impl PreviewVariant {
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => Self::FromBottom,
            1 => Self::FromRight,
            _ => Self::FromLeft,
        }
    }

    /// Collapsed clip path the preview starts from.
    pub fn hidden_clip_path(&self) -> &'static str {
        match self {
            Self::FromBottom => "polygon(0% 100%, 100% 100%, 100% 100%, 0% 100%)",
            Self::FromRight => "polygon(100% 0, 100% 0, 100% 100%, 100% 100%)",
            Self::FromLeft => "polygon(0% 0%, 0% 0%, 0% 100%, 0% 100%)",
        }
    }
}

pub const OPEN_CLIP_PATH: &str = "polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    active: usize,
    hovering: bool,
    len: usize,
}

impl MenuState {
    pub fn new(len: usize) -> Self {
        Self {
            open: false,
            active: 0,
            hovering: false,
            len,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Whether the preview panel is showing.
    pub fn is_previewing(&self) -> bool {
        self.open && self.hovering
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.hovering = false;
    }

    /// Ignored while closed or for an index past the end.
    pub fn hover(&mut self, index: usize) {
        if !self.open || index >= self.len {
            return;
        }
        self.active = index;
        self.hovering = true;
    }

    /// Hides the preview; the last active item stays selected.
    pub fn leave(&mut self) {
        self.hovering = false;
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.is_previewing() && self.active == index
    }

    pub fn variant(&self) -> PreviewVariant {
        PreviewVariant::for_index(self.active)
    }

    /// One-based position out of the total, e.g. `3 / 7`.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.active + 1, self.len)
    }
}

/// `7` -> `07`
pub fn item_number(index: usize) -> String {
    format!("{:02}", index + 1)
}
