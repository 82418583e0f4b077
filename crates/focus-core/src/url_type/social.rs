//! Social media and chat: YouTube, Reddit, Twitter/X, LinkedIn, Slack, Discord.

use std::sync::LazyLock;

use regex::Regex;

use super::info::{TypeStyle, UrlType, UrlTypeInfo};
use super::matcher::{on_hosts, query_param, MatchResult};
use super::Detector;

static YOUTUBE_CLIP_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(?:shorts|live|embed)/[A-Za-z0-9_-]+").expect("valid regex")
});
static REDDIT_COMMENTS_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/r/[^/]+/comments/[a-z0-9]+").expect("valid regex"));
static STATUS_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/[^/]+/status(?:es)?/\d+").expect("valid regex"));
static LINKEDIN_POST_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(?:posts|feed/update)/[^/]+").expect("valid regex"));
static SLACK_CHANNEL_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(?:archives|client/[A-Z0-9]+)/[A-Z0-9]+").expect("valid regex")
});
static DISCORD_CHANNEL_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/channels/[^/]+/\d+").expect("valid regex"));

const YOUTUBE_VIDEO: TypeStyle = TypeStyle {
    kind: UrlType::YoutubeVideo,
    platform: "YouTube",
    color: "#FF0000",
    icon: "play-circle",
    label: "Video",
};

const REDDIT_POST: TypeStyle = TypeStyle {
    kind: UrlType::RedditPost,
    platform: "Reddit",
    color: "#FF4500",
    icon: "message-circle",
    label: "Post",
};

const TWITTER_POST: TypeStyle = TypeStyle {
    kind: UrlType::TwitterPost,
    platform: "X",
    color: "#1DA1F2",
    icon: "twitter",
    label: "Post",
};

const LINKEDIN_POST: TypeStyle = TypeStyle {
    kind: UrlType::LinkedinPost,
    platform: "LinkedIn",
    color: "#0A66C2",
    icon: "linkedin",
    label: "Post",
};

const SLACK_CHANNEL: TypeStyle = TypeStyle {
    kind: UrlType::SlackChannel,
    platform: "Slack",
    color: "#4A154B",
    icon: "hash",
    label: "Channel",
};

const DISCORD_CHANNEL: TypeStyle = TypeStyle {
    kind: UrlType::DiscordChannel,
    platform: "Discord",
    color: "#5865F2",
    icon: "hash",
    label: "Channel",
};

pub fn detect_youtube_video(url: &str) -> MatchResult {
    on_hosts(url, &["youtube.com", "youtu.be"], |parsed, host| {
        if host == "youtu.be" {
            return MatchResult::from_bool(parsed.path().len() > 1);
        }
        let path = parsed.path();
        let is_watch = path == "/watch" && query_param(parsed, "v").is_some();
        MatchResult::from_bool(is_watch || YOUTUBE_CLIP_PATH.is_match(path))
    })
}

pub fn detect_reddit_post(url: &str) -> MatchResult {
    on_hosts(url, &["reddit.com", "redd.it"], |parsed, host| {
        if host == "redd.it" {
            return MatchResult::from_bool(parsed.path().len() > 1);
        }
        MatchResult::from_bool(REDDIT_COMMENTS_PATH.is_match(parsed.path()))
    })
}

pub fn detect_twitter_post(url: &str) -> MatchResult {
    on_hosts(url, &["twitter.com", "x.com"], |parsed, _| {
        MatchResult::from_bool(STATUS_PATH.is_match(parsed.path()))
    })
}

pub fn detect_linkedin_post(url: &str) -> MatchResult {
    on_hosts(url, &["linkedin.com"], |parsed, _| {
        MatchResult::from_bool(LINKEDIN_POST_PATH.is_match(parsed.path()))
    })
}

pub fn detect_slack_channel(url: &str) -> MatchResult {
    on_hosts(url, &["slack.com"], |parsed, _| {
        MatchResult::from_bool(SLACK_CHANNEL_PATH.is_match(parsed.path()))
    })
}

pub fn detect_discord_channel(url: &str) -> MatchResult {
    on_hosts(url, &["discord.com", "discordapp.com"], |parsed, _| {
        MatchResult::from_bool(DISCORD_CHANNEL_PATH.is_match(parsed.path()))
    })
}

const DETECTORS: &[(Detector, &TypeStyle)] = &[
    (detect_youtube_video, &YOUTUBE_VIDEO),
    (detect_reddit_post, &REDDIT_POST),
    (detect_twitter_post, &TWITTER_POST),
    (detect_linkedin_post, &LINKEDIN_POST),
    (detect_slack_channel, &SLACK_CHANNEL),
    (detect_discord_channel, &DISCORD_CHANNEL),
];

pub fn resolve(url: &str) -> Option<UrlTypeInfo> {
    super::first_match(url, DETECTORS)
}
