//! Treeviz formatter for parse results

use crate::ast::{Component, Date, DateTime, Edtf, Endpoint, Interval, Season};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// A labeled node with children, rendered with box-drawing connectors
struct Node {
    label: String,
    children: Vec<Node>,
}

impl Node {
    fn leaf(label: String) -> Self {
        Self {
            label,
            children: Vec::new(),
        }
    }

    fn branch(label: String, children: Vec<Node>) -> Self {
        Self { label, children }
    }
}

pub fn to_treeviz_str(edtf: &Edtf) -> String {
    let children = match edtf {
        Edtf::Date(date) => date_children(date),
        Edtf::DateTime(date_time) => date_time_children(date_time),
        Edtf::Interval(interval) => interval_children(interval),
        Edtf::Season(season) => season_children(season),
    };
    let mut result = format!("{}: {}\n", edtf.kind(), truncate(&edtf.to_string(), 40));
    append_children(&mut result, &children, "");
    result
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!("{}{} {}\n", prefix, connector, node.label));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, &node.children, &new_prefix);
}

fn append_children(result: &mut String, children: &[Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last);
    }
}

fn component_node(name: &str, component: &Component) -> Node {
    let label = match component.describe_tags() {
        Some(tags) => format!("{}: {} [{}]", name, component.literal(), tags),
        None => format!("{}: {}", name, component.literal()),
    };
    Node::leaf(label)
}

fn date_children(date: &Date) -> Vec<Node> {
    let mut children = vec![component_node("Year", &date.year)];
    if let Some(month) = &date.month {
        children.push(component_node("Month", month));
    }
    if let Some(day) = &date.day {
        children.push(component_node("Day", day));
    }
    children
}

fn date_node(name: &str, date: &Date) -> Node {
    Node::branch(format!("{}: {}", name, date), date_children(date))
}

fn date_time_children(date_time: &DateTime) -> Vec<Node> {
    let mut children = vec![
        date_node("Date", &date_time.date),
        Node::leaf(format!("Time: {}", date_time.time)),
    ];
    if let Some(timezone) = &date_time.timezone {
        children.push(Node::leaf(format!("Timezone: {}", timezone)));
    }
    children
}

fn endpoint_node(name: &str, endpoint: &Endpoint) -> Node {
    match endpoint {
        Endpoint::Known(date) => date_node(name, date),
        Endpoint::Unknown | Endpoint::Open => Node::leaf(format!("{}: {}", name, endpoint)),
    }
}

fn interval_children(interval: &Interval) -> Vec<Node> {
    vec![
        endpoint_node("Start", &interval.start),
        endpoint_node("End", &interval.end),
    ]
}

fn season_children(season: &Season) -> Vec<Node> {
    let mut children = vec![
        component_node("Year", &season.year),
        Node::leaf(format!(
            "Code: {} ({})",
            season.code.code(),
            season.code.name()
        )),
    ];
    if let Some(qualifier) = &season.qualifier {
        children.push(Node::leaf(format!("Qualifier: {}", truncate(qualifier, 30))));
    }
    children
}
