pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "rpentomino",
        cells: &[(3, 2), (2, 3), (3, 3), (3, 4), (4, 4)],
    },
    Pattern {
        name: "glider",
        cells: &[
            (-2, -2),
            (-1, -2),
            (-2, -1),
            (-1, -1),
            (1, 1),
            (2, 1),
            (3, 1),
            (3, 2),
            (2, 3),
        ],
    },
    Pattern {
        name: "square",
        cells: &[(1, 1), (2, 1), (1, 2), (2, 2)],
    },
    Pattern {
        name: "blinker",
        cells: &[(1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(1, 1), (2, 1), (3, 1), (0, 2), (1, 2), (2, 2)],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name == name)
}

pub fn names() -> Vec<&'static str> {
    PATTERNS.iter().map(|p| p.name).collect()
}
