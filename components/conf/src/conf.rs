use std::collections::BTreeMap;
use std::fs;
use std::net::AddrParseError;
use std::net::SocketAddr;
use std::ops::Deref;
use std::path::Path;

use super::errors::ConfError;
use message::LocalNode;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "./tests/conf_tests.rs"]
mod tests;

/// NodeId is the global identity of a node.
/// It is the replication address of the node, e.g. "127.0.0.1:4441".
pub type NodeId = String;

/// Node is a member of the cluster that stores replicas and answers mutations.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Node {
    #[serde(default)]
    pub node_id: NodeId,
    pub api_addr: SocketAddr,
    pub replication: SocketAddr,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClusterInfo {
    /// The key is NodeId and should be unique globally.
    /// When parsing cluster conf yaml, the key is converted to the replication addr.
    pub nodes: BTreeMap<NodeId, Node>,
}

// let user to use c.get() just like c.nodes.get()
impl Deref for ClusterInfo {
    type Target = BTreeMap<NodeId, Node>;
    fn deref(&self) -> &Self::Target {
        &self.nodes
    }
}

impl ClusterInfo {
    /// from_file read cluster conf yaml from a local file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ClusterInfo, ConfError> {
        let content = fs::read_to_string(path)?;
        ClusterInfo::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<ClusterInfo, ConfError> {
        let mut cluster: ClusterInfo = serde_yaml::from_str(content)?;

        for (nid, node) in cluster.nodes.iter_mut() {
            ClusterInfo::norm_node(nid, node)?;
        }

        Ok(cluster)
    }

    // make a node id from key, i.e. mac address
    pub fn norm_node(nid: &str, node: &mut Node) -> Result<(), AddrParseError> {
        node.node_id = String::from(nid);
        node.replication = nid.parse()?;
        Ok(())
    }

    /// local picks the node this process runs as.
    pub fn local(self, nid: &str) -> Result<LocalNodeInfo, ConfError> {
        let node = self
            .nodes
            .get(nid)
            .ok_or_else(|| ConfError::NoSuchNode(nid.into()))?
            .clone();

        Ok(LocalNodeInfo {
            cluster: self,
            node,
        })
    }
}

/// LocalNodeInfo is the cluster conf seen by one node.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalNodeInfo {
    pub cluster: ClusterInfo,
    pub node: Node,
}

impl LocalNode for LocalNodeInfo {
    /// Replies are sent from the replication address.
    fn local_addr(&self) -> SocketAddr {
        self.node.replication
    }
}
