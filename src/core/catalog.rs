//! # Property Catalog
//!
//! The one in-memory list of listings. Every screen that shows properties
//! reads from the same `Catalog` so listing details can never drift between
//! the home list and the detail view.
//!
//! Also holds the agent directory used by the contact screen and the
//! home-screen category chips, which are static as well.

use crate::core::property::{Property, PropertyId};
use crate::core::route::PropertyRef;

#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// The four listings the app ships with.
    pub fn seeded() -> Self {
        Self::new(vec![
            listing(1, "Modern Villa", "123 Maple St, California", 250_000, (4, 3), 2400, "pic_1", true),
            listing(2, "Luxury Apartment", "456 Oak Ave, New York", 180_000, (2, 2), 1200, "pic_2", false),
            listing(3, "Cosy House", "789 Pine Rd, Texas", 320_000, (3, 2), 1800, "pic_3", true),
            listing(4, "Skyline Penthouse", "101 View Blvd, Miami", 550_000, (5, 4), 3500, "pic_4", true),
        ])
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Linear scan by id. `None` is a normal outcome; callers render a
    /// not-found view.
    pub fn lookup_by_id(&self, id: PropertyId) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Resolve a route parameter. Malformed parameters always miss.
    pub fn resolve(&self, property: &PropertyRef) -> Option<&Property> {
        property.id().and_then(|id| self.lookup_by_id(id))
    }

    /// Case-insensitive substring match on title or address, in catalog order.
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Property> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.properties.iter().collect();
        }
        self.properties
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.address.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Agent responsible for a listing. Unknown or malformed ids get the
    /// default agent.
    pub fn agent_for(&self, property: &PropertyRef) -> Agent {
        match property.id().map(PropertyId::get) {
            Some(1) => Agent::new(
                "John Smith",
                "john.smith@realestate.com",
                "+1 (555) 123-4567",
                "Experienced real estate agent specializing in luxury villas.",
            ),
            Some(2) => Agent::new(
                "Jane Doe",
                "jane.doe@realestate.com",
                "+1 (555) 234-5678",
                "Expert in urban apartments and modern living spaces.",
            ),
            Some(3) => Agent::new(
                "Bob Johnson",
                "bob.johnson@realestate.com",
                "+1 (555) 345-6789",
                "Specialist in cozy family homes and suburban properties.",
            ),
            Some(4) => Agent::new(
                "Alice Brown",
                "alice.brown@realestate.com",
                "+1 (555) 456-7890",
                "Luxury penthouse and high-end property expert.",
            ),
            _ => Agent::new(
                "Default Agent",
                "agent@realestate.com",
                "+1 (555) 000-0000",
                "Real estate professional ready to assist.",
            ),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    title: &str,
    address: &str,
    price: u32,
    (beds, baths): (u32, u32),
    area: u32,
    image_name: &str,
    is_garage: bool,
) -> Property {
    Property {
        id: PropertyId::from_seed(id),
        title: title.to_string(),
        address: address.to_string(),
        price,
        beds,
        baths,
        area,
        image_name: image_name.to_string(),
        is_garage,
    }
}

/// Contact card for the agent handling a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
}

impl Agent {
    fn new(name: &str, email: &str, phone: &str, bio: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            bio: bio.to_string(),
        }
    }
}

/// Home-screen category chips. Listings carry no category, so selecting one
/// only changes which chip is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    House,
    Apartment,
    Villa,
    Office,
    Townhouse,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::House,
        Category::Apartment,
        Category::Villa,
        Category::Office,
        Category::Townhouse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::House => "House",
            Category::Apartment => "Apartment",
            Category::Villa => "Villa",
            Category::Office => "Office",
            Category::Townhouse => "Townhouse",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Next chip to the right, stopping at the last one.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    /// Previous chip to the left, stopping at the first one.
    pub fn prev(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }
}
