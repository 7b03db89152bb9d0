use dashmap::DashMap;

/// Minimal document surface the feedback helpers need.
pub trait Renderer: Send + Sync {
    /// Replace the content of an existing element; `false` if there is no such element.
    fn replace_content(&self, element_id: &str, markup: &str) -> bool;
    /// Attach a new top-level node.
    fn mount(&self, node_id: &str, markup: &str);
    /// Start the exit animation of a mounted node.
    fn begin_fade_out(&self, node_id: &str);
    /// Detach a mounted node. Unknown ids are ignored.
    fn unmount(&self, node_id: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedNode {
    pub markup: String,
    pub fading: bool,
}

/// In-memory document: named elements plus nodes appended to the body.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: DashMap<String, String>,
    nodes: DashMap<String, MountedNode>,
}

impl MemoryDocument {
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let doc = Self::default();
        for id in ids {
            doc.elements.insert(id.into(), String::new());
        }
        doc
    }

    pub fn content(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|c| c.value().clone())
    }

    pub fn node(&self, id: &str) -> Option<MountedNode> {
        self.nodes.get(id).map(|n| n.value().clone())
    }

    pub fn mounted_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.key().clone()).collect()
    }
}

impl Renderer for MemoryDocument {
    fn replace_content(&self, element_id: &str, markup: &str) -> bool {
        match self.elements.get_mut(element_id) {
            Some(mut slot) => {
                *slot = markup.to_string();
                true
            }
            None => false,
        }
    }

    fn mount(&self, node_id: &str, markup: &str) {
        self.nodes.insert(node_id.to_string(), MountedNode { markup: markup.to_string(), fading: false });
    }

    fn begin_fade_out(&self, node_id: &str) {
        if let Some(mut node) = self.nodes.get_mut(node_id) {
            node.fading = true;
        }
    }

    fn unmount(&self, node_id: &str) {
        self.nodes.remove(node_id);
    }
}
