use chrono::{DateTime, Local, Utc};
use clap::builder::styling::{AnsiColor, Color, Style};
use clap::builder::Styles;
use crossterm::style::{Color as CtColor, Stylize};

use wafrn_notifications::api::models::Post;
use wafrn_notifications::api::NotificationBadges;
use wafrn_notifications::{FullNotificationV3, Notification};

// ═══════════════════════════════════════════════════════════════════════════════
// Clap Styles
// ═══════════════════════════════════════════════════════════════════════════════

pub fn get_styles() -> Styles {
    clap::builder::Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Magenta))),
        )
        .header(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Magenta))),
        )
        .literal(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .invalid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Color Palette
// ═══════════════════════════════════════════════════════════════════════════════

pub mod colors {
    use crossterm::style::Color;

    pub const CYAN: Color = Color::Rgb {
        r: 0,
        g: 255,
        b: 255,
    };
    pub const MAGENTA: Color = Color::Rgb {
        r: 255,
        g: 0,
        b: 255,
    };
    pub const GREEN: Color = Color::Rgb {
        r: 0,
        g: 255,
        b: 136,
    };
    pub const ORANGE: Color = Color::Rgb {
        r: 255,
        g: 165,
        b: 0,
    };
    pub const YELLOW: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 0,
    };
    pub const PINK: Color = Color::Rgb {
        r: 255,
        g: 105,
        b: 180,
    };
    pub const DIM: Color = Color::Rgb {
        r: 128,
        g: 128,
        b: 128,
    };
}

const SNIPPET_CHARS: usize = 60;

fn type_color(kind: &str) -> CtColor {
    match kind {
        "follow" => colors::GREEN,
        "like" => colors::PINK,
        "reblog" | "rewoot" => colors::CYAN,
        "mention" => colors::YELLOW,
        "quote" => colors::ORANGE,
        _ => colors::MAGENTA,
    }
}

fn snippet(post: Option<&Post>) -> String {
    let Some(post) = post else {
        return String::new();
    };
    let text = if post.content_warning.is_empty() {
        post.content.trim()
    } else {
        post.content_warning.trim()
    };
    let mut out: String = text.chars().take(SNIPPET_CHARS).collect();
    if text.chars().count() > SNIPPET_CHARS {
        out.push('…');
    }
    out
}

fn print_line(kind: &str, created_at: DateTime<Utc>, who: &str, extra: &str, post: Option<&Post>) {
    let when = created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string();
    let label = format!("{:<8}", kind.to_uppercase());
    println!(
        "{} {} {}{} {}",
        when.with(colors::DIM),
        label.with(type_color(kind)).bold(),
        who,
        extra,
        snippet(post).with(colors::DIM)
    );
}

fn user_label(url: Option<&str>, name: Option<&str>) -> String {
    match (name, url) {
        (Some(name), _) if !name.is_empty() => name.to_string(),
        (_, Some(url)) => url.to_string(),
        _ => "(unknown user)".to_string(),
    }
}

pub fn print_notification(notification: &Notification) {
    let user = notification.user.as_ref();
    let who = user_label(user.map(|u| u.url.as_str()), user.map(|u| u.name.as_str()));
    let extra = match &notification.details {
        wafrn_notifications::NotificationDetails::Emoji { emoji, .. } => {
            format!(" {}", emoji.content)
        }
        _ => String::new(),
    };
    print_line(
        notification.details.type_name(),
        notification.created_at,
        &who,
        &extra,
        notification.details.post(),
    );
}

pub fn print_notification_v3(notification: &FullNotificationV3) {
    use wafrn_notifications::notifications::FullNotificationV3Details as Details;

    let user = notification.user.as_ref();
    let who = user_label(user.map(|u| u.url.as_str()), user.map(|u| u.name.as_str()));
    let (kind, extra) = match &notification.details {
        Details::Follow => ("follow", String::new()),
        Details::Like { .. } => ("like", String::new()),
        Details::Rewoot { .. } => ("rewoot", String::new()),
        Details::Mention { .. } => ("mention", String::new()),
        Details::Quote { .. } => ("quote", String::new()),
        Details::EmojiReact { emoji, .. } => (
            "emoji",
            emoji
                .as_ref()
                .map(|e| format!(" {}", e.content))
                .unwrap_or_default(),
        ),
    };
    print_line(kind, notification.created_at, &who, &extra, notification.post());
}

pub fn print_badges(badges: &NotificationBadges) {
    println!();
    println!(
        "{} {}  {} {}  {} {}",
        "notifications".with(colors::DIM),
        badges.notifications.to_string().with(colors::MAGENTA).bold(),
        "asks".with(colors::DIM),
        badges.asks.to_string().with(colors::CYAN).bold(),
        "follow requests".with(colors::DIM),
        badges
            .follows_awaiting_approval
            .to_string()
            .with(colors::GREEN)
            .bold(),
    );
    if badges.reports > 0 || badges.users_awaiting_approval > 0 {
        println!(
            "{} {}  {} {}",
            "reports".with(colors::DIM),
            badges.reports.to_string().with(colors::ORANGE).bold(),
            "users awaiting approval".with(colors::DIM),
            badges
                .users_awaiting_approval
                .to_string()
                .with(colors::YELLOW)
                .bold(),
        );
    }
}
