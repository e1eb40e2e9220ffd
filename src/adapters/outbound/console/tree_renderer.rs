use crate::dependency_analysis::domain::{Dependency, DependencyTree, DEFAULT_PACKAGING};
use owo_colors::OwoColorize;
use std::collections::HashSet;

/// Display options for [`TreeRenderer`]
#[derive(Debug, Clone, Default)]
pub struct TreeRenderOptions {
    /// Nodes deeper than this are not shown
    pub max_depth: Option<usize>,
    /// Only nodes with this scope are shown; matching descendants of hidden
    /// nodes move up to the nearest shown ancestor
    pub scope: Option<String>,
    /// Full or simple coordinates to highlight
    pub highlight: HashSet<String>,
    pub color: bool,
}

/// A node that survived filtering, with its surviving descendants
struct VisibleNode<'t> {
    dependency: &'t Dependency,
    children: Vec<VisibleNode<'t>>,
}

/// TreeRenderer draws a dependency tree with box-drawing characters
///
/// The root is always drawn. Output ends with a newline.
pub struct TreeRenderer {
    options: TreeRenderOptions,
}

impl TreeRenderer {
    pub fn new(options: TreeRenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, tree: &DependencyTree) -> String {
        let root = tree.root();
        let children = self.visible_children(root);

        let mut output = String::new();
        output.push_str(&self.label(root));
        output.push('\n');
        self.render_children(&children, "", &mut output);
        output
    }

    fn visible_children<'t>(&self, node: &'t Dependency) -> Vec<VisibleNode<'t>> {
        let mut visible = Vec::new();
        for child in node.children() {
            if self.options.max_depth.is_some_and(|max| child.depth() > max) {
                continue;
            }
            let grandchildren = self.visible_children(child);
            if self.scope_matches(child) {
                visible.push(VisibleNode {
                    dependency: child,
                    children: grandchildren,
                });
            } else {
                visible.extend(grandchildren);
            }
        }
        visible
    }

    fn scope_matches(&self, node: &Dependency) -> bool {
        match &self.options.scope {
            Some(scope) => node.scope().eq_ignore_ascii_case(scope),
            None => true,
        }
    }

    fn render_children(&self, nodes: &[VisibleNode<'_>], prefix: &str, output: &mut String) {
        for (i, node) in nodes.iter().enumerate() {
            let last = i + 1 == nodes.len();
            let (branch, continuation) = if last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };

            output.push_str(prefix);
            output.push_str(branch);
            output.push_str(&self.label(node.dependency));
            output.push('\n');

            let child_prefix = format!("{}{}", prefix, continuation);
            self.render_children(&node.children, &child_prefix, output);
        }
    }

    fn label(&self, node: &Dependency) -> String {
        let mut coordinate = format!("{}:{}", node.group_id(), node.artifact_id());
        if node.packaging() != DEFAULT_PACKAGING {
            coordinate.push(':');
            coordinate.push_str(node.packaging());
        }
        coordinate.push(':');
        coordinate.push_str(node.version());

        let highlighted = self.options.highlight.contains(&node.simple_coordinate())
            || self.options.highlight.contains(&node.coordinate());

        let mut label = if !self.options.color {
            coordinate
        } else if highlighted {
            coordinate.bright_magenta().on_red().to_string()
        } else {
            coordinate.bold().to_string()
        };

        if !node.scope().is_empty() {
            label.push(' ');
            label.push_str(&self.scope_tag(node.scope()));
        }
        if node.is_optional() {
            label.push_str(" (optional)");
        }
        if highlighted && !self.options.color {
            label.push_str(" ◀");
        }
        label
    }

    fn scope_tag(&self, scope: &str) -> String {
        let tag = format!("[{}]", scope);
        if !self.options.color {
            return tag;
        }
        match scope.to_ascii_lowercase().as_str() {
            "compile" => tag.green().to_string(),
            "runtime" => tag.blue().to_string(),
            "test" => tag.red().to_string(),
            "provided" => tag.yellow().to_string(),
            "system" => tag.cyan().to_string(),
            "import" => tag.magenta().to_string(),
            _ => tag.white().to_string(),
        }
    }
}
