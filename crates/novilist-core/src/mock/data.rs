//! Seed Data
//!
//! Catalog, reviews and feeds the mock backend starts with.

use crate::model::{
    Comment, Notification, NotificationKind, Novel, NovelRef, NovelStatus, Review, Thread,
};

pub(crate) struct Account {
    pub username: String,
    pub display_name: String,
    pub password: String,
    pub joined_at: String,
    pub following: Vec<u32>,
}

#[allow(clippy::too_many_arguments)]
fn novel(
    id: u32,
    title: &str,
    author: &str,
    language: &str,
    status: NovelStatus,
    rating: Option<f32>,
    genres: &[&str],
    chapters: u32,
    followers: u32,
    updated_at: &str,
    synopsis: &str,
) -> Novel {
    Novel {
        id,
        title: title.to_string(),
        author: author.to_string(),
        language: language.to_string(),
        status,
        rating,
        genres: genres.iter().map(|g| g.to_string()).collect(),
        synopsis: synopsis.to_string(),
        chapters,
        followers,
        updated_at: updated_at.to_string(),
    }
}

pub(crate) fn novels() -> Vec<Novel> {
    vec![
        novel(1, "The Last Reader of the Tower", "Han Seoyun", "kr", NovelStatus::Completed, Some(4.7),
            &["Fantasy", "Apocalypse"], 551, 18_420, "2024-05-02T09:00:00Z",
            "The only person who finished a forgotten web novel wakes up inside its first chapter."),
        novel(2, "Jade Spirit Cultivator", "Mo Qinghe", "cn", NovelStatus::Ongoing, Some(4.2),
            &["Xianxia", "Cultivation"], 1_204, 9_310, "2024-06-11T14:30:00Z",
            "A disciple with crippled meridians discovers a spirit hiding in a cracked jade pendant."),
        novel(3, "Return of the Disgraced Count", "Park Jiwoo", "kr", NovelStatus::Ongoing, Some(4.5),
            &["Fantasy", "Comedy"], 890, 12_775, "2024-06-09T03:15:00Z",
            "A tired office worker becomes the trash son of a count and just wants a quiet life."),
        novel(4, "Apothecary of the Moonlit Court", "Aoi Takamura", "jp", NovelStatus::Completed, Some(4.0),
            &["Mystery", "Historical"], 312, 6_120, "2023-11-20T12:00:00Z",
            "A palace herbalist solves poisonings nobody else wants to notice."),
        novel(5, "Ledger of Ten Thousand Worlds", "Xu Lan", "cn", NovelStatus::Hiatus, Some(3.6),
            &["Xuanhuan", "System"], 640, 2_045, "2023-08-01T08:00:00Z",
            "A merchant's accounting system turns every debt into a path between worlds."),
        novel(6, "Mana Does Not Exist", "Riley Hart", "en", NovelStatus::Ongoing, None,
            &["Sci-fi", "LitRPG"], 74, 310, "2024-06-12T20:45:00Z",
            "An engineer trapped in a fantasy world insists on measuring everything."),
        novel(7, "Second Life as a Dungeon Core", "Kim Dohyun", "kr", NovelStatus::Hiatus, Some(3.9),
            &["Fantasy", "Base-building"], 233, 1_480, "2024-01-17T10:10:00Z",
            "Reincarnated as a dungeon, a former game designer builds the hardest floor ever made."),
        novel(8, "Sword Saint of the Rainy Inn", "Tanaka Ren", "jp", NovelStatus::Ongoing, Some(4.4),
            &["Action", "Slice of Life"], 158, 3_902, "2024-06-01T07:05:00Z",
            "A retired sword saint runs a countryside inn and keeps getting asked for duels."),
    ]
}

#[allow(clippy::too_many_arguments)]
fn review(id: u32, novel_id: u32, author: &str, rating: f32, helpful: u32, created_at: &str, spoiler: bool, body: &str) -> Review {
    Review {
        id,
        novel_id,
        author: author.to_string(),
        rating,
        body: body.to_string(),
        created_at: created_at.to_string(),
        helpful,
        spoiler,
    }
}

pub(crate) fn reviews() -> Vec<Review> {
    vec![
        review(1, 1, "inkwyrm", 5.0, 212, "2024-05-10T11:00:00Z", false,
            "The best **meta** story I have read. The ending lands every single setup."),
        review(2, 1, "quietpages", 4.0, 87, "2024-05-14T16:20:00Z", true,
            "Middle arcs drag, but ||the final reveal about the author|| made it worth it."),
        review(3, 1, "dawnreader", 3.0, 12, "2024-05-20T08:45:00Z", false,
            "Strong start. Power creep gets out of hand after chapter 300."),
        review(4, 2, "lotus_eater", 4.0, 45, "2024-06-02T13:00:00Z", false,
            "Classic cultivation with a surprisingly funny spirit companion."),
        review(5, 2, "quietpages", 4.5, 30, "2024-06-05T19:30:00Z", false,
            "Translation quality improved a lot after chapter 200."),
        review(6, 3, "inkwyrm", 5.0, 150, "2024-06-03T09:10:00Z", false,
            "Found-family done right. I laughed out loud more than once."),
        review(7, 3, "blue_quill", 4.0, 150, "2024-04-28T22:00:00Z", false,
            "Great humor, although the protagonist's *do nothing* act wears thin."),
        review(8, 4, "teahouse", 4.0, 22, "2023-12-01T10:00:00Z", false,
            "Cozy mystery pacing, meticulous historical detail."),
        review(9, 5, "dawnreader", 3.5, 4, "2023-09-15T18:00:00Z", false,
            "Clever premise, shame about the hiatus."),
        review(10, 8, "blue_quill", 4.5, 19, "2024-06-06T06:00:00Z", false,
            "Every duel is short and sharp. Very comfy read."),
    ]
}

fn comment(id: u32, novel_id: u32, author: &str, likes: u32, created_at: &str, body: &str) -> Comment {
    Comment {
        id,
        novel_id,
        author: author.to_string(),
        body: body.to_string(),
        created_at: created_at.to_string(),
        likes,
    }
}

pub(crate) fn comments() -> Vec<Comment> {
    vec![
        comment(1, 1, "teahouse", 34, "2024-05-03T10:00:00Z", "Just started, the first chapter hooked me."),
        comment(2, 1, "lotus_eater", 8, "2024-05-04T12:30:00Z", "Is the side story collection translated?"),
        comment(3, 2, "inkwyrm", 15, "2024-06-11T15:00:00Z", "New chapter is out! The pendant spirit is back."),
        comment(4, 3, "quietpages", 41, "2024-06-09T04:00:00Z", "The dragon subplot is my favourite part."),
        comment(5, 3, "dawnreader", 2, "2024-06-10T09:00:00Z", "Anyone know the release schedule?"),
        comment(6, 8, "teahouse", 5, "2024-06-02T08:00:00Z", "This inn should exist in real life."),
    ]
}

#[allow(clippy::too_many_arguments)]
fn thread(id: u32, novel: Option<(u32, &str)>, title: &str, author: &str, language: &str, created_at: &str, replies: u32, votes: u32, pinned: bool) -> Thread {
    Thread {
        id,
        novel: novel.map(|(id, title)| NovelRef { id, title: title.to_string() }),
        title: title.to_string(),
        author: author.to_string(),
        language: language.to_string(),
        created_at: created_at.to_string(),
        replies,
        votes,
        pinned,
    }
}

pub(crate) fn threads() -> Vec<Thread> {
    vec![
        thread(1, None, "Community guidelines and spoiler tags", "moderator", "en", "2023-01-01T00:00:00Z", 3, 120, true),
        thread(2, Some((1, "The Last Reader of the Tower")), "Ending discussion (spoilers!)", "inkwyrm", "kr", "2024-05-11T10:00:00Z", 248, 310, false),
        thread(3, Some((2, "Jade Spirit Cultivator")), "Cultivation realm cheat sheet", "lotus_eater", "cn", "2024-06-01T09:00:00Z", 57, 98, false),
        thread(4, None, "Recommend me a completed Korean fantasy", "dawnreader", "kr", "2024-06-08T18:00:00Z", 91, 44, false),
        thread(5, Some((4, "Apothecary of the Moonlit Court")), "Which case was your favourite?", "teahouse", "jp", "2023-12-05T14:00:00Z", 26, 17, false),
    ]
}

fn notification(id: u32, kind: NotificationKind, novel: Option<(u32, &str)>, created_at: &str, read: bool, message: &str) -> Notification {
    Notification {
        id,
        kind,
        message: message.to_string(),
        novel: novel.map(|(id, title)| NovelRef { id, title: title.to_string() }),
        created_at: created_at.to_string(),
        read,
    }
}

pub(crate) fn notifications() -> Vec<Notification> {
    vec![
        notification(1, NotificationKind::NewChapter, Some((3, "Return of the Disgraced Count")), "2024-06-09T03:20:00Z", false,
            "Chapter 890 is now available"),
        notification(2, NotificationKind::ReviewReply, Some((1, "The Last Reader of the Tower")), "2024-06-08T12:00:00Z", false,
            "inkwyrm replied to your review"),
        notification(3, NotificationKind::Follow, None, "2024-06-07T09:30:00Z", true,
            "teahouse started following you"),
        notification(4, NotificationKind::NewChapter, Some((2, "Jade Spirit Cultivator")), "2024-06-11T14:35:00Z", false,
            "Chapter 1204 is now available"),
        notification(5, NotificationKind::System, None, "2024-05-30T00:00:00Z", true,
            "Spoiler tags are now supported in reviews: wrap text in ||double bars||"),
    ]
}

pub(crate) fn accounts() -> Vec<Account> {
    vec![Account {
        username: "reader".to_string(),
        display_name: "Avid Reader".to_string(),
        password: "password123".to_string(),
        joined_at: "2023-03-14T00:00:00Z".to_string(),
        following: vec![1, 3],
    }]
}
