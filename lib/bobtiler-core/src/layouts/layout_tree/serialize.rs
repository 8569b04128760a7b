use crate::layouts::layout_tree::container::{ContainerKind, ContainerNode};
use crate::layouts::layout_tree::{ContainerId, LayoutTree};
use crate::layouts::Direction;
use crate::metadata::Metadata;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SerializedLayoutTree {
    pub prev_id: ContainerId,
    pub root: SerializedContainer,
}

#[derive(Debug, Serialize)]
pub struct SerializedContainer {
    pub id: ContainerId,
    pub parent_id: Option<ContainerId>,
    #[serde(flatten)]
    pub kind: SerializedContainerKind,
    pub children: Vec<SerializedContainer>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SerializedContainerKind {
    Window { metadata: Metadata },
    Split { direction: Direction },
}

pub fn serialize_tree(tree: &LayoutTree) -> SerializedLayoutTree {
    SerializedLayoutTree {
        prev_id: tree.prev_id(),
        root: serialize_container(tree, tree.root()),
    }
}

fn serialize_container(tree: &LayoutTree, node: &ContainerNode) -> SerializedContainer {
    SerializedContainer {
        id: node.id(),
        parent_id: node.parent_id(),
        kind: match node.kind() {
            ContainerKind::Window(attrs) => SerializedContainerKind::Window {
                metadata: attrs.clone(),
            },
            ContainerKind::Split(direction) => SerializedContainerKind::Split {
                direction: *direction,
            },
        },
        children: tree
            .children(node)
            .map(|child| serialize_container(tree, child))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DumpFormat;
    use crate::layouts::layout_tree::tests::{new_metadata, new_tree, ROOT_ID};

    #[test]
    fn test_serialize_single_window() {
        let tree = new_tree();
        let serialized = serialize_tree(&tree);

        assert_eq!(serialized.prev_id, ROOT_ID);
        assert_eq!(serialized.root.id, ROOT_ID);
        assert_eq!(serialized.root.parent_id, None);
        assert!(serialized.root.children.is_empty());
        match &serialized.root.kind {
            SerializedContainerKind::Window { metadata } => assert_eq!(metadata, &new_metadata(1)),
            _ => panic!("Expected root to be a window"),
        }
    }

    #[test]
    fn test_serialize_split_to_json() {
        let mut tree = new_tree();
        let second = tree
            .add_window(ROOT_ID, Direction::Vertical, new_metadata(2))
            .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&tree.dump(DumpFormat::Json).unwrap()).unwrap();

        assert_eq!(json["prev_id"], ROOT_ID + 2);
        assert_eq!(json["root"]["id"], ROOT_ID);
        assert_eq!(json["root"]["type"], "split");
        assert_eq!(json["root"]["direction"], "vertical");
        assert!(json["root"]["parent_id"].is_null());
        assert_eq!(json["root"]["children"][1]["id"], second);
        assert_eq!(json["root"]["children"][1]["type"], "window");
        assert_eq!(json["root"]["children"][1]["parent_id"], ROOT_ID);
        assert_eq!(json["root"]["children"][1]["metadata"]["name"], "Tab 2");
        assert_eq!(json["root"]["children"][0]["metadata"]["id"], 1);
    }

    #[test]
    fn test_serialize_to_yaml_value() {
        let mut tree = new_tree();
        tree.add_window(ROOT_ID, Direction::Horizontal, new_metadata(2))
            .unwrap();

        let value = tree.serialize().unwrap();
        let root = &value["root"];

        assert_eq!(root["type"].as_str(), Some("split"));
        assert_eq!(root["direction"].as_str(), Some("horizontal"));
        assert_eq!(root["children"].as_sequence().map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_dump_yaml() {
        let tree = new_tree();
        let yaml = tree.dump(DumpFormat::Yaml).unwrap();

        assert!(yaml.contains("type: window"));
        assert!(yaml.contains("name: Tab 1"));
        assert!(yaml.contains(&format!("id: {ROOT_ID}")));
    }
}
