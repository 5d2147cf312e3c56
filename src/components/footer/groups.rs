use crate::app::state::{AppMode, AppState, Panel};

/// One key hint. Highlighted hints mark a toggle that is currently on.
#[derive(Debug, Clone, PartialEq)]
pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}

fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem {
        key,
        desc,
        highlighted: false,
    }
}

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.last_error.is_some() {
        return vec![FooterGroup {
            name: "ERROR",
            items: vec![item("Esc", "dismiss")],
        }];
    }

    if state.mode == AppMode::Help {
        return vec![FooterGroup {
            name: "HELP",
            items: vec![item("?/Esc", "close")],
        }];
    }

    let mut groups = match state.focus {
        Panel::Terminal => vec![FooterGroup {
            name: "TERM",
            items: vec![
                item("Enter", "run"),
                item("\u{2191}/\u{2193}", "history"),
                item("PgUp/Dn", "scroll"),
            ],
        }],
        Panel::Map => {
            let has_selection = !state.map.selector.state().is_empty();
            vec![
                FooterGroup {
                    name: "MAP",
                    items: vec![
                        item("j/k", "move"),
                        item("Enter", "select"),
                        FooterItem {
                            key: "x",
                            desc: "dismiss",
                            highlighted: has_selection,
                        },
                    ],
                },
                FooterGroup {
                    name: "VIEW",
                    items: vec![
                        FooterItem {
                            key: "l",
                            desc: "legend",
                            highlighted: state.map.legend_open,
                        },
                        item("b", "layer"),
                    ],
                },
            ]
        }
    };

    groups.push(FooterGroup {
        name: "APP",
        items: vec![item("Tab", "focus"), item("F1", "help"), item("^C", "quit")],
    });
    groups
}
