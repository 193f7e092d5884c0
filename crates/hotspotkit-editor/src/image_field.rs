//! Background image field.
//!
//! The hotspot editor does not own the background image; it watches the
//! field that does. [`ImageField`] keeps the current image and notifies
//! subscribers whenever it is replaced, so the editor can drop hotspots
//! that no longer describe anything.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Subscription handle for unsubscribing from image changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// The chosen background image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageParams {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

impl ImageParams {
    pub fn new(path: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }
}

/// Notification sent to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageEvent {
    /// The image was replaced or removed.
    Changed { image: Option<ImageParams> },
}

type ImageHandler = Box<dyn Fn(&ImageEvent) + Send + Sync>;

/// Observable background image field.
pub struct ImageField {
    current: RwLock<Option<ImageParams>>,
    handlers: Arc<RwLock<HashMap<SubscriptionId, ImageHandler>>>,
}

impl ImageField {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn with_image(image: ImageParams) -> Self {
        let field = Self::new();
        *field.current.write() = Some(image);
        field
    }

    /// The current image, if one has been chosen.
    pub fn image(&self) -> Option<ImageParams> {
        self.current.read().clone()
    }

    /// Replaces the image and notifies every subscriber.
    ///
    /// Returns the number of handlers called.
    pub fn set_image(&self, image: Option<ImageParams>) -> usize {
        *self.current.write() = image.clone();

        let event = ImageEvent::Changed { image };
        let handlers = self.handlers.read();
        for handler in handlers.values() {
            handler(&event);
        }
        tracing::debug!("Image change delivered to {} subscribers", handlers.len());
        handlers.len()
    }

    /// Subscribes to image changes.
    ///
    /// The handler runs on the thread calling [`set_image`], so it should
    /// only record the event.
    ///
    /// [`set_image`]: ImageField::set_image
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&ImageEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.handlers.write().insert(id, Box::new(handler));
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.handlers.write().remove(&id).is_some();
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }
}

impl Default for ImageField {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ImageField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageField")
            .field("current", &*self.current.read())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_subscribe_and_notify() {
        let field = ImageField::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let id = field.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(field.set_image(Some(ImageParams::new("cat.png", 640, 480))), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(field.image().map(|i| i.width), Some(640));

        assert!(field.unsubscribe(id));
        assert!(!field.unsubscribe(id));
        assert_eq!(field.set_image(None), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(field.image().is_none());
    }
}
