//! Workshop table rows

use crate::data::Workshop;

/// Payment status badge; never carries a price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Paid,
    Free,
}

impl StatusBadge {
    pub fn for_workshop(workshop: &Workshop) -> Self {
        if workshop.is_paid {
            StatusBadge::Paid
        } else {
            StatusBadge::Free
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusBadge::Paid => "Paid",
            StatusBadge::Free => "Free",
        }
    }

    /// Tailwind classes for the pill
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusBadge::Paid => "bg-green-100 text-green-800",
            StatusBadge::Free => "bg-blue-100 text-blue-800",
        }
    }
}

/// Display-ready row of the "Current Workshops" table
#[derive(Debug, Clone, PartialEq)]
pub struct WorkshopRow {
    pub id: String,
    pub title: String,
    /// `"88% completion"`
    pub completion: String,
    pub instructor: String,
    pub category: String,
    pub enrollments: u32,
    /// `"12 reviews"`
    pub reviews: String,
    /// One decimal place
    pub rating: String,
    pub status: StatusBadge,
}

impl From<&Workshop> for WorkshopRow {
    fn from(workshop: &Workshop) -> Self {
        Self {
            id: workshop.id.clone(),
            title: workshop.title.clone(),
            completion: format!("{}% completion", workshop.completion_rate),
            instructor: workshop.instructor.clone(),
            category: workshop.category.clone(),
            enrollments: workshop.enrollments,
            reviews: format!("{} reviews", workshop.reviews),
            rating: format!("{:.1}", workshop.rating),
            status: StatusBadge::for_workshop(workshop),
        }
    }
}

/// Column headings, in display order
pub const COLUMNS: [&str; 6] = [
    "Title",
    "Instructor",
    "Category",
    "Enrollments",
    "Rating",
    "Status",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_workshop;

    #[test]
    fn test_row_formatting() {
        let row = WorkshopRow::from(&sample_workshop());
        assert_eq!(row.completion, "88% completion");
        assert_eq!(row.reviews, "12 reviews");
        assert_eq!(row.rating, "4.6");
        assert_eq!(row.enrollments, 42);
    }

    #[test]
    fn test_free_badge_hides_price() {
        let workshop = sample_workshop();
        assert!(!workshop.is_paid);
        assert!(workshop.price.is_some());

        let badge = StatusBadge::for_workshop(&workshop);
        assert_eq!(badge, StatusBadge::Free);
        assert!(!badge.label().contains('$'));
        assert!(!badge.label().contains(&workshop.price.unwrap().to_string()));
    }

    #[test]
    fn test_paid_badge() {
        let mut workshop = sample_workshop();
        workshop.is_paid = true;
        assert_eq!(WorkshopRow::from(&workshop).status.label(), "Paid");
    }
}
