use std::collections::VecDeque;

/// Maximum number of toasts on screen at once
pub const MAX_TOASTS: usize = 5;

/// How long a toast stays up before dismissing itself
pub const TOAST_DURATION_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Queue a toast, evicting the oldest past `MAX_TOASTS`. Returns the new id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            kind,
            message: message.into(),
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "sent");
        let b = queue.push(ToastKind::Error, "Invalid message");
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);

        queue.dismiss(a);
        let remaining = queue.iter().map(|t| t.message.as_str()).collect::<Vec<_>>();
        assert_eq!(remaining, vec!["Invalid message"]);

        // unknown ids are ignored
        queue.dismiss(42);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_oldest_evicted() {
        let mut queue = ToastQueue::default();
        for i in 0..(MAX_TOASTS + 2) {
            queue.push(ToastKind::Success, format!("toast {i}"));
        }
        assert_eq!(queue.len(), MAX_TOASTS);
        assert_eq!(queue.iter().next().map(|t| t.id), Some(2));
    }
}
