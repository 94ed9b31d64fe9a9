//! HTML dashboard for `GET /`.

use super::BotStats;

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub(super) fn render(stats: &BotStats) -> String {
    let (name, status) = match &stats.bot_name {
        Some(n) => (escape_html(n), "Online"),
        None => ("Chef Bot".to_string(), "Starting"),
    };
    let rows: String = stats
        .guilds
        .iter()
        .map(|g| format!("<tr><td>{}</td><td>{}</td></tr>", escape_html(&g.name), g.members))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{name} status</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; background: #1e1f22; color: #dbdee1; }}
table {{ border-collapse: collapse; }}
td, th {{ padding: 0.3rem 1rem; border-bottom: 1px solid #3f4147; text-align: left; }}
.status {{ color: #23a55a; }}
</style>
</head>
<body>
<h1>{name}</h1>
<p class="status">Status: {status}</p>
<p>Servers: {servers} &middot; Members: {members}</p>
<table>
<thead><tr><th>Server</th><th>Members</th></tr></thead>
<tbody>{rows}</tbody>
</table>
</body>
</html>
"#,
        name = name,
        status = status,
        servers = stats.guilds.len(),
        members = stats.total_members(),
        rows = rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::GuildStats;

    #[test]
    fn escapes_guild_names() {
        let stats = BotStats {
            bot_name: Some("Chef".into()),
            guilds: vec![GuildStats {
                name: "<script>alert(1)</script>".into(),
                members: 3,
            }],
        };
        let html = render(&stats);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Status: Online"));
    }

    #[test]
    fn starting_without_bot_name() {
        let html = render(&BotStats::default());
        assert!(html.contains("Status: Starting"));
        assert!(html.contains("Servers: 0"));
    }
}
