use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
}

/// The fixed user directory, served in this order for the life of the process.
pub static USERS: [User; 2] = [
    User {
        id: 1,
        name: "田中太郎",
    },
    User {
        id: 2,
        name: "山田花子",
    },
];
