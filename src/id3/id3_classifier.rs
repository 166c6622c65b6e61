//! Defines the ID3 classifier.
use colored::Colorize;
use serde::{Serialize, Deserialize};

use crate::{Classifier, Instance};
use crate::error::Result;
use super::node::Node;

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// ID3 classifier.
/// This struct is just a wrapper of the root [`Node`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Id3Classifier {
    root: Node,
}


impl From<Node> for Id3Classifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Classifier for Id3Classifier {
    fn classify(&self, instance: &Instance) -> Result<bool> {
        self.root.classify(instance)
    }
}


impl Id3Classifier {
    /// The root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Length of the longest root-to-leaf path, in edges.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Serialize the tree to JSON.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }


    /// Deserialize a tree written by [`Id3Classifier::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        let tree = serde_json::from_str(json)?;
        Ok(tree)
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }


    /// Print the tree to stdout, one block per branch.
    /// Same layout as the `Display` implementation, highlighted.
    pub fn print_tree(&self) {
        for (attribute, edges, level) in self.root.branches() {
            if level == 1 {
                println!("{}", "root".bold().red());
            } else {
                println!("{} {}", "level".bold().red(), level);
            }
            println!("attribute: {}", attribute.bold().green());
            for edge in edges {
                let child = edge.child();
                let caption = if child.is_leaf() {
                    child.caption().as_str().yellow()
                } else {
                    child.caption().as_str().blue()
                };
                println!("|-{}->{}", edge.value(), caption);
            }
            println!();
        }
    }
}


impl fmt::Display for Id3Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (attribute, edges, level) in self.root.branches() {
            if level == 1 {
                writeln!(f, "root")?;
            } else {
                writeln!(f, "level {level}")?;
            }
            writeln!(f, "attribute: {attribute}")?;
            for edge in edges {
                writeln!(f, "|-{}->{}", edge.value(), edge.child().caption())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
