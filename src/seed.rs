//! Sample board contents loaded at start-up.

use chrono::NaiveDate;

use crate::fields::{Priority, Status};
use crate::task::{Assignee, Progress, Project, Task, TaskId};

const AVATAR_BASE: &str = "https://images.unsplash.com";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn progress(p: u16) -> Progress {
    Progress::new(p).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: u64,
    title: &str,
    description: &str,
    status: Status,
    priority: Priority,
    due: NaiveDate,
    assignee: (&str, &str),
    tags: &[&str],
    pct: u16,
) -> Task {
    Task {
        id: TaskId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        status,
        priority,
        due_date: due,
        assignee: Assignee::new(assignee.0, format!("{AVATAR_BASE}/{}?w=100&h=100&fit=crop", assignee.1)),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        progress: progress(pct),
    }
}

/// The eight sample tasks, in display order.
pub fn sample_tasks() -> Vec<Task> {
    use Priority::*;
    use Status::*;

    vec![
        task(
            1,
            "Design new landing page",
            "Create a modern and responsive landing page design with updated brand colors",
            InProgress,
            High,
            date(2025, 11, 5),
            ("Sarah Chen", "photo-1494790108377-be9c29b29330"),
            &["design", "ui/ux", "urgent"],
            65,
        ),
        task(
            2,
            "Implement user authentication",
            "Add login and registration functionality with JWT tokens",
            InProgress,
            High,
            date(2025, 11, 3),
            ("Mike Johnson", "photo-1500648767791-00dcc994a43e"),
            &["backend", "security"],
            40,
        ),
        task(
            3,
            "Write API documentation",
            "Document all API endpoints with examples and response schemas",
            Review,
            Medium,
            date(2025, 11, 10),
            ("Emma Davis", "photo-1438761681033-6461ffad8d80"),
            &["documentation", "api"],
            90,
        ),
        task(
            4,
            "Set up CI/CD pipeline",
            "Configure automated testing and deployment with GitHub Actions",
            Todo,
            Medium,
            date(2025, 11, 15),
            ("Alex Rivera", "photo-1472099645785-5658abf4ff4e"),
            &["devops", "automation"],
            0,
        ),
        task(
            5,
            "Create marketing materials",
            "Design social media posts and email templates for product launch",
            Completed,
            Low,
            date(2025, 10, 28),
            ("Lisa Wang", "photo-1487412720507-e7ab37603c6f"),
            &["marketing", "design"],
            100,
        ),
        task(
            6,
            "Optimize database queries",
            "Improve performance of slow queries and add proper indexing",
            InProgress,
            High,
            date(2025, 11, 1),
            ("Tom Anderson", "photo-1507003211169-0a1dd7228f2d"),
            &["backend", "performance"],
            25,
        ),
        task(
            7,
            "User testing session",
            "Conduct usability testing with 10 participants and gather feedback",
            Todo,
            Medium,
            date(2025, 11, 12),
            ("Rachel Green", "photo-1534528741775-53994a69daeb"),
            &["research", "ux"],
            0,
        ),
        task(
            8,
            "Mobile app bug fixes",
            "Fix reported bugs in iOS and Android versions",
            InProgress,
            High,
            date(2025, 11, 2),
            ("David Kim", "photo-1506794778202-cad84cf45f1d"),
            &["mobile", "bugfix"],
            70,
        ),
    ]
}

/// The sample projects shown in the sidebar.
pub fn sample_projects() -> Vec<Project> {
    [
        ("1", "Website Redesign", "purple", 12),
        ("2", "Mobile App", "blue", 8),
        ("3", "Marketing Campaign", "green", 15),
        ("4", "Product Launch", "orange", 6),
    ]
    .into_iter()
    .map(|(id, name, color, count)| Project {
        id: id.to_string(),
        name: name.to_string(),
        color_tag: color.to_string(),
        task_count: count,
    })
    .collect()
}
