//! In-memory data source serving the bundled sample records.

use chrono::NaiveDate;

use crate::domain::action::{EntityKind, RowAction};
use crate::domain::chart::{ChartPoint, ChartSeries};
use crate::domain::insight::{BookmarkInsight, FollowInsight, StatCard, Trend, TrendStat};
use crate::domain::message::{ActivityStatus, MessageInsight};
use crate::domain::music::{MusicCategory, MusicTrack, NewMusicCategory, NewMusicTrack};
use crate::domain::post::{ContentType, Post, PostCategory};
use crate::domain::report::{Report, ReportStatus, ReportTarget};
use crate::domain::types::{
    CategoryId, InsightId, MessageInsightId, PostId, ReportId, TrackId, UserId,
};
use crate::domain::user::{DeviceType, User, UserTier};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    ActionDispatcher, DashboardReader, InsightReader, MessageReader, MusicReader, PostReader,
    ReportReader, UserReader,
};

const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.svg";

/// Static record sets built once at startup.
#[derive(Clone, Debug)]
pub struct SampleRepository {
    users: Vec<User>,
    posts: Vec<Post>,
    reports: Vec<Report>,
    messages: Vec<MessageInsight>,
    tracks: Vec<MusicTrack>,
    categories: Vec<MusicCategory>,
    bookmarks: Vec<BookmarkInsight>,
    follows: Vec<FollowInsight>,
    charts: Vec<ChartSeries>,
}

fn day(year: i32, month: u32, day: u32) -> RepositoryResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        RepositoryError::Unexpected(format!("invalid sample date {year}-{month}-{day}"))
    })
}

impl SampleRepository {
    pub fn new() -> RepositoryResult<Self> {
        Ok(Self {
            users: sample_users()?,
            posts: sample_posts()?,
            reports: sample_reports()?,
            messages: sample_messages()?,
            tracks: sample_tracks()?,
            categories: sample_categories()?,
            bookmarks: sample_bookmarks()?,
            follows: sample_follows()?,
            charts: sample_charts()?,
        })
    }

    fn contains(&self, entity: EntityKind, id: i32) -> bool {
        match entity {
            EntityKind::Users => self.users.iter().any(|r| r.id.get() == id),
            EntityKind::Posts => self.posts.iter().any(|r| r.id.get() == id),
            EntityKind::Reports => self.reports.iter().any(|r| r.id.get() == id),
            EntityKind::Messages => self.messages.iter().any(|r| r.id.get() == id),
            EntityKind::Tracks => self.tracks.iter().any(|r| r.id.get() == id),
            EntityKind::Categories => self.categories.iter().any(|r| r.id.get() == id),
            EntityKind::Bookmarks => self.bookmarks.iter().any(|r| r.id.get() == id),
            EntityKind::Follows => self.follows.iter().any(|r| r.id.get() == id),
        }
    }
}

fn sample_users() -> RepositoryResult<Vec<User>> {
    use DeviceType::*;
    use UserTier::*;

    [
        (1, "Oluwaferanmi Olotu", "Dreammm", Android, false, Regular),
        (2, "Sarah Johnson", "SarahJ", Ios, true, Verified),
        (3, "Michael Chen", "MikeC", Web, false, Subscription),
        (4, "Emily Rodriguez", "EmilyR", Android, true, Moderator),
        (5, "David Kim", "DavidK", Ios, false, Verified),
        (6, "Jessica Wilson", "JessW", Android, false, Regular),
        (7, "Robert Taylor", "RobT", Web, true, Moderator),
        (8, "Amanda Davis", "AmandaD", Ios, false, Subscription),
        (9, "James Brown", "JamesB", Android, false, Verified),
        (10, "Lisa Anderson", "LisaA", Web, true, Moderator),
        (11, "Chris Martinez", "ChrisM", Ios, false, Regular),
        (12, "Nicole Thompson", "NicoleT", Android, false, Subscription),
    ]
    .into_iter()
    .map(
        |(id, fullname, username, device_type, is_moderator, tier)| -> RepositoryResult<User> {
            Ok(User {
                id: UserId::new(id)?,
                fullname: fullname.to_string(),
                username: username.to_string(),
                device_type,
                is_moderator,
                profile_image: PLACEHOLDER_IMAGE.to_string(),
                tier,
            })
        },
    )
    .collect()
}

fn sample_posts() -> RepositoryResult<Vec<Post>> {
    use ContentType::*;
    use PostCategory::*;

    [
        (1, Image, "ghhb", "Shaheed", 0, 0, false, 26, Regular),
        (2, Text, "ghhb", "Shaheed", 0, 0, false, 26, Regular),
        (3, Image, "john_doe", "John Doe", 25, 150, false, 25, Popular),
        (4, Text, "jane_smith", "Jane Smith", 8, 42, true, 24, Restricted),
        (5, Image, "mike_wilson", "Mike Wilson", 5, 18, false, 23, Recent),
        (6, Text, "sarah_jones", "Sarah Jones", 35, 200, false, 22, Popular),
        (7, Image, "alex_brown", "Alex Brown", 12, 67, true, 21, Restricted),
        (8, Text, "emma_davis", "Emma Davis", 3, 9, false, 20, Recent),
        (9, Image, "chris_taylor", "Chris Taylor", 45, 320, false, 19, Popular),
        (10, Text, "lisa_white", "Lisa White", 7, 23, true, 18, Restricted),
    ]
    .into_iter()
    .map(
        |(id, content_type, username, fullname, comments, likes, is_restricted, date, category)|
         -> RepositoryResult<Post> {
            Ok(Post {
                id: PostId::new(id)?,
                content_type,
                username: username.to_string(),
                fullname: fullname.to_string(),
                comments,
                likes,
                is_restricted,
                created_at: day(2025, 4, date)?,
                category,
            })
        },
    )
    .collect()
}

fn sample_reports() -> RepositoryResult<Vec<Report>> {
    use ReportStatus::*;

    let room = |name: &str| ReportTarget::Room {
        name: name.to_string(),
    };
    let post = |title: &str| ReportTarget::Post {
        title: title.to_string(),
    };
    let user = |name: &str| ReportTarget::User {
        name: name.to_string(),
    };
    let reel = |title: &str| ReportTarget::Reel {
        title: title.to_string(),
    };

    [
        (
            1,
            room("Gaming Room #1"),
            "@gamer123",
            "Inappropriate Content",
            "User was sharing inappropriate images in the room chat",
            26,
            Pending,
        ),
        (
            2,
            post("My Daily Routine"),
            "@lifestyle_blogger",
            "Spam",
            "Post contains multiple promotional links without disclosure",
            25,
            Pending,
        ),
        (
            3,
            user("john_doe_official"),
            "@john_doe",
            "Harassment",
            "User has been sending threatening messages to other users",
            24,
            Resolved,
        ),
        (
            4,
            reel("Dance Challenge"),
            "@dancer_pro",
            "Copyright Violation",
            "Reel uses copyrighted music without permission",
            23,
            Pending,
        ),
        (
            5,
            room("Study Group"),
            "@student_helper",
            "Off-topic Discussion",
            "Room being used for non-educational purposes",
            22,
            Dismissed,
        ),
        (
            6,
            post("Product Review"),
            "@reviewer_x",
            "False Information",
            "Post contains misleading product claims",
            21,
            Resolved,
        ),
        (
            7,
            user("fake_celebrity"),
            "@not_real_celeb",
            "Impersonation",
            "User is impersonating a verified celebrity",
            20,
            Pending,
        ),
        (
            8,
            reel("Cooking Tutorial"),
            "@chef_master",
            "Dangerous Content",
            "Reel shows unsafe cooking practices",
            19,
            Resolved,
        ),
    ]
    .into_iter()
    .map(
        |(id, target, user_identity, reason, description, date, status)| -> RepositoryResult<Report> {
            Ok(Report {
                id: ReportId::new(id)?,
                user_image: PLACEHOLDER_IMAGE.to_string(),
                target,
                user_identity: user_identity.to_string(),
                reason: reason.to_string(),
                description: description.to_string(),
                created_at: day(2025, 4, date)?,
                status,
            })
        },
    )
    .collect()
}

fn sample_messages() -> RepositoryResult<Vec<MessageInsight>> {
    use ActivityStatus::*;

    [
        (1, "john_doe", "John Doe", 150, 143, VeryActive, "2 mins ago", None),
        (
            2,
            "alice_smith",
            "Alice Smith",
            89,
            92,
            Active,
            "1 hour ago",
            Some("Spam messages"),
        ),
        (3, "mike_wilson", "Mike Wilson", 12, 30, Inactive, "3 weeks ago", None),
        (
            4,
            "sarah_jones",
            "Sarah Jones",
            240,
            198,
            VeryActive,
            "just now",
            Some("Harassment reports"),
        ),
        (5, "emma_davis", "Emma Davis", 4, 1, Inactive, "2 months ago", None),
        (6, "chris_taylor", "Chris Taylor", 67, 71, Active, "5 hours ago", None),
    ]
    .into_iter()
    .map(
        |(id, username, fullname, sent, received, activity, last_active, flag_reason)|
         -> RepositoryResult<MessageInsight> {
            Ok(MessageInsight {
                id: MessageInsightId::new(id)?,
                username: username.to_string(),
                fullname: fullname.to_string(),
                messages_sent: sent,
                messages_received: received,
                activity,
                last_active: last_active.to_string(),
                flag_reason: flag_reason.map(str::to_string),
            })
        },
    )
    .collect()
}

fn sample_tracks() -> RepositoryResult<Vec<MusicTrack>> {
    [
        (1, "Summer Vibes", "Pop", "3:45", "John Smith", 26),
        (2, "Midnight Jazz", "Jazz", "4:20", "Sarah Johnson", 25),
        (3, "Rock Anthem", "Rock", "3:12", "Mike Wilson", 24),
    ]
    .into_iter()
    .map(|(id, title, category, duration, artist, date)| -> RepositoryResult<MusicTrack> {
        Ok(MusicTrack {
            id: TrackId::new(id)?,
            title: title.to_string(),
            category: category.to_string(),
            duration: duration.parse()?,
            artist: artist.to_string(),
            created_at: day(2025, 4, date)?,
        })
    })
    .collect()
}

fn sample_categories() -> RepositoryResult<Vec<MusicCategory>> {
    [(1, "Pop", 15, 20), (2, "Jazz", 8, 18), (3, "Rock", 12, 15)]
        .into_iter()
        .map(|(id, title, music_count, date)| -> RepositoryResult<MusicCategory> {
            Ok(MusicCategory {
                id: CategoryId::new(id)?,
                title: title.to_string(),
                music_count,
                created_at: day(2025, 4, date)?,
            })
        })
        .collect()
}

fn sample_bookmarks() -> RepositoryResult<Vec<BookmarkInsight>> {
    [
        (1, "Ultimate Guide to Web Development", "john_dev", 1250, 3400, 1),
        (2, "10 Tips for Better Code", "sarah_coder", 980, 2100, 2),
        (3, "Understanding React Hooks", "react_master", 850, 1900, 3),
    ]
    .into_iter()
    .map(
        |(id, post_title, author_name, bookmark_count, like_count, date)|
         -> RepositoryResult<BookmarkInsight> {
            Ok(BookmarkInsight {
                id: InsightId::new(id)?,
                post_title: post_title.to_string(),
                author_name: author_name.to_string(),
                bookmark_count,
                like_count,
                created_at: day(2024, 5, date)?,
            })
        },
    )
    .collect()
}

fn sample_follows() -> RepositoryResult<Vec<FollowInsight>> {
    [
        (1, "tech_influencer", "Tech Guru", 25000, 1200, 0.15, (1, 15)),
        (2, "code_ninja", "Coding Expert", 18000, 900, 0.22, (2, 1)),
        (3, "web_wizard", "Web Developer", 15000, 800, 0.18, (2, 15)),
    ]
    .into_iter()
    .map(
        |(id, username, fullname, followers, following, ratio, (month, date))|
         -> RepositoryResult<FollowInsight> {
            Ok(FollowInsight {
                id: InsightId::new(id)?,
                username: username.to_string(),
                fullname: fullname.to_string(),
                followers,
                following,
                follow_back_ratio: ratio,
                joined_at: day(2024, month, date)?,
            })
        },
    )
    .collect()
}

fn series(
    key: &str,
    title: &str,
    total_value: u64,
    value_label: &str,
    max_value: f64,
    points: &[((u32, u32), u32)],
) -> RepositoryResult<ChartSeries> {
    let points = points
        .iter()
        .map(|&((month, date), value)| -> RepositoryResult<ChartPoint> {
            Ok(ChartPoint::new(day(2024, month, date)?, value))
        })
        .collect::<RepositoryResult<Vec<_>>>()?;

    Ok(ChartSeries {
        key: key.to_string(),
        title: title.to_string(),
        total_value,
        value_label: value_label.to_string(),
        max_value,
        points,
    })
}

fn sample_charts() -> RepositoryResult<Vec<ChartSeries>> {
    Ok(vec![
        series(
            "posts",
            "Total Number of Posts",
            219,
            "Posts",
            35.0,
            &[
                ((4, 26), 3),
                ((4, 29), 10),
                ((5, 2), 1),
                ((5, 5), 4),
                ((5, 8), 3),
                ((5, 11), 7),
                ((5, 14), 30),
                ((5, 17), 12),
                ((5, 20), 27),
            ],
        )?,
        series(
            "users",
            "Total Number of Users",
            11,
            "User Count",
            2.0,
            &[
                ((5, 12), 0),
                ((5, 16), 0),
                ((5, 20), 0),
                ((5, 24), 0),
                ((5, 25), 0),
                ((5, 28), 0),
                ((6, 1), 0),
                ((6, 5), 0),
            ],
        )?,
        series(
            "reels",
            "Total Number of Reels",
            15,
            "Reels",
            5.0,
            &[
                ((4, 26), 1),
                ((4, 29), 2),
                ((5, 2), 1),
                ((5, 5), 3),
                ((5, 8), 2),
                ((5, 11), 1),
                ((5, 14), 4),
                ((5, 17), 1),
            ],
        )?,
        series(
            "rooms",
            "Total Number of Rooms",
            3,
            "Rooms",
            2.0,
            &[
                ((4, 26), 0),
                ((4, 29), 1),
                ((5, 2), 0),
                ((5, 5), 1),
                ((5, 8), 0),
                ((5, 11), 0),
                ((5, 14), 1),
                ((5, 17), 0),
            ],
        )?,
    ])
}

fn trend(title: &str, value: &str, change: Option<(&str, Trend)>) -> TrendStat {
    TrendStat {
        title: title.to_string(),
        value: value.to_string(),
        change: change.map(|(change, _)| change.to_string()),
        trend: change.map(|(_, trend)| trend),
    }
}

impl UserReader for SampleRepository {
    fn list_users(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.users.clone())
    }
}

impl PostReader for SampleRepository {
    fn list_posts(&self) -> RepositoryResult<Vec<Post>> {
        Ok(self.posts.clone())
    }
}

impl ReportReader for SampleRepository {
    fn list_reports(&self) -> RepositoryResult<Vec<Report>> {
        Ok(self.reports.clone())
    }
}

impl MessageReader for SampleRepository {
    fn list_message_insights(&self) -> RepositoryResult<Vec<MessageInsight>> {
        Ok(self.messages.clone())
    }

    fn list_message_stats(&self) -> RepositoryResult<Vec<TrendStat>> {
        Ok(vec![
            trend("Total DMs", "2,945", None),
            trend("Active Users", "1,234", None),
            trend("Flagged Conversations", "23", None),
        ])
    }
}

impl MusicReader for SampleRepository {
    fn list_tracks(&self) -> RepositoryResult<Vec<MusicTrack>> {
        Ok(self.tracks.clone())
    }

    fn list_categories(&self) -> RepositoryResult<Vec<MusicCategory>> {
        Ok(self.categories.clone())
    }
}

impl InsightReader for SampleRepository {
    fn list_bookmark_insights(&self) -> RepositoryResult<Vec<BookmarkInsight>> {
        Ok(self.bookmarks.clone())
    }

    fn list_follow_insights(&self) -> RepositoryResult<Vec<FollowInsight>> {
        Ok(self.follows.clone())
    }

    fn list_insight_stats(&self) -> RepositoryResult<Vec<TrendStat>> {
        Ok(vec![
            trend("Total Bookmarks", "45.2K", Some(("+12.5%", Trend::Up))),
            trend("Total Followers", "128.5K", Some(("+8.2%", Trend::Up))),
            trend(
                "Average Follow-back Rate",
                "42%",
                Some(("-2.1%", Trend::Down)),
            ),
        ])
    }
}

impl DashboardReader for SampleRepository {
    fn list_stat_cards(&self) -> RepositoryResult<Vec<StatCard>> {
        let card = |label: &str, count: u64, link: &str| StatCard {
            label: label.to_string(),
            count,
            link: link.to_string(),
        };

        Ok(vec![
            card("Users", self.users.len() as u64, "/users"),
            card("Posts", 219, "/posts"),
            card("Reels", 15, "/reports?filter=reel"),
            card("Music", self.tracks.len() as u64, "/music"),
            card("Rooms", 3, "/reports?filter=room"),
            card("Notifications", 0, "/messages"),
            card("Interests", 11, "/music?tab=categories"),
            card("Verification Requests", 0, "/users?filter=verified"),
            card("Bookmarks", 0, "/insights?tab=bookmarks"),
            card("Pending", 0, "/reports"),
        ])
    }

    fn list_chart_series(&self) -> RepositoryResult<Vec<ChartSeries>> {
        Ok(self.charts.clone())
    }
}

impl ActionDispatcher for SampleRepository {
    fn row_exists(&self, entity: EntityKind, id: i32) -> RepositoryResult<bool> {
        Ok(self.contains(entity, id))
    }

    fn dispatch(&self, action: &RowAction) -> RepositoryResult<()> {
        if !self.contains(action.entity, action.id) {
            return Err(RepositoryError::NotFound);
        }

        log::info!("Received row action: {action}");
        Ok(())
    }

    fn submit_track(&self, track: &NewMusicTrack) -> RepositoryResult<()> {
        log::info!(
            "Received new track {:?} by {} ({}, {})",
            track.title.as_str(),
            track.artist,
            track.category,
            track.duration
        );
        Ok(())
    }

    fn submit_category(&self, category: &NewMusicCategory) -> RepositoryResult<()> {
        log::info!("Received new music category {:?}", category.title.as_str());
        Ok(())
    }
}
