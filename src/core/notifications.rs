//! Static notification feed shown on the Notifications screen.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Property,
    Price,
    Appointment,
    Welcome,
    Market,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    /// Human-readable age, e.g. "2 hours ago".
    pub timestamp: String,
    pub is_read: bool,
    pub kind: NotificationKind,
}

impl Notification {
    fn new(
        id: u32,
        title: &str,
        message: &str,
        timestamp: &str,
        is_read: bool,
        kind: NotificationKind,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            message: message.to_string(),
            timestamp: timestamp.to_string(),
            is_read,
            kind,
        }
    }
}

pub fn seeded() -> Vec<Notification> {
    use NotificationKind::*;
    vec![
        Notification::new(
            1,
            "New Property Available",
            "A new luxury villa has been listed in your area. Check it out!",
            "2 hours ago",
            false,
            Property,
        ),
        Notification::new(
            2,
            "Price Drop Alert",
            "The Modern Villa you viewed has a price reduction of $10,000!",
            "1 day ago",
            false,
            Price,
        ),
        Notification::new(
            3,
            "Appointment Reminder",
            "Your property viewing appointment is tomorrow at 2 PM.",
            "2 days ago",
            true,
            Appointment,
        ),
        Notification::new(
            4,
            "Welcome to RealEstate App",
            "Thanks for joining! Explore properties and find your dream home.",
            "1 week ago",
            true,
            Welcome,
        ),
        Notification::new(
            5,
            "Market Update",
            "Property prices in California have increased by 3% this month.",
            "1 week ago",
            true,
            Market,
        ),
    ]
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}
