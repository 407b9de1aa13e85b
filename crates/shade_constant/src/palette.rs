//! Default color palette the theme extension is merged over.
//!
//! Values follow the utility framework's v3 default palette. Each family is a
//! list of `(shade, #RRGGBB)` pairs, lightest first.

pub type FamilyTable = (&'static str, &'static [(u16, &'static str)]);

/// Cool neutral gray.
pub const GRAY: &[(u16, &str)] = &[
    (50, "#F9FAFB"),
    (100, "#F3F4F6"),
    (200, "#E5E7EB"),
    (300, "#D1D5DB"),
    (400, "#9CA3AF"),
    (500, "#6B7280"),
    (600, "#4B5563"),
    (700, "#374151"),
    (800, "#1F2937"),
    (900, "#111827"),
];

pub const RED: &[(u16, &str)] = &[
    (50, "#FEF2F2"),
    (100, "#FEE2E2"),
    (200, "#FECACA"),
    (300, "#FCA5A5"),
    (400, "#F87171"),
    (500, "#EF4444"),
    (600, "#DC2626"),
    (700, "#B91C1C"),
    (800, "#991B1B"),
    (900, "#7F1D1D"),
];

pub const GREEN: &[(u16, &str)] = &[
    (50, "#F0FDF4"),
    (100, "#DCFCE7"),
    (200, "#BBF7D0"),
    (300, "#86EFAC"),
    (400, "#4ADE80"),
    (500, "#22C55E"),
    (600, "#16A34A"),
    (700, "#15803D"),
    (800, "#166534"),
    (900, "#14532D"),
];

pub const BLUE: &[(u16, &str)] = &[
    (50, "#EFF6FF"),
    (100, "#DBEAFE"),
    (200, "#BFDBFE"),
    (300, "#93C5FD"),
    (400, "#60A5FA"),
    (500, "#3B82F6"),
    (600, "#2563EB"),
    (700, "#1D4ED8"),
    (800, "#1E40AF"),
    (900, "#1E3A8A"),
];

/// Every default family, in display order.
pub const DEFAULT_FAMILIES: &[FamilyTable] = &[
    ("gray", GRAY),
    ("red", RED),
    ("green", GREEN),
    ("blue", BLUE),
];
