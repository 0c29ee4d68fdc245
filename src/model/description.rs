//! Plain-data descriptions of a `Network`.
//!
//! A `NetworkDescription` is what a loader hands to the engine: topology and CPT values, with no
//! behaviour attached. It is (de)serializable with serde so any format can be used to store one.

use super::{Network, NetworkBuilder};
use crate::init::Initialization;
use crate::util::Result;

use serde::{Deserialize, Serialize};


/// A single variable: its name, the names of its parents and its CPT rows
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableDescription {
    pub name: String,

    #[serde(default)]
    pub parents: Vec<String>,

    /// ```P(X = true)``` per parent assignment, all-true assignment first
    pub cpt: Vec<f64>
}

/// Every variable in a network, in topological order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkDescription {
    pub variables: Vec<VariableDescription>
}

impl NetworkDescription {

    /// Build the `Network` this description represents.
    pub fn build(&self) -> Result<Network> {
        self.variables
            .iter()
            .fold(NetworkBuilder::new(), |builder, v| {
                let parents: Vec<&str> = v.parents.iter().map(|p| p.as_str()).collect();
                builder.with_variable(&v.name, &parents, Initialization::Table(&v.cpt))
            })
            .build()
    }
}

impl From<&Network> for NetworkDescription {

    fn from(network: &Network) -> Self {
        let names = network.names();
        let variables = network.variables()
                               .map(|v| VariableDescription {
                                   name: String::from(v.name()),
                                   parents: v.parents().iter().map(|&p| String::from(names[p])).collect(),
                                   cpt: v.cpt().table().to_vec()
                               })
                               .collect();

        NetworkDescription { variables }
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::model::directed::tests::poker;
    use crate::util::BoolnetError;

    const CHAIN: &str = r#"{
        "variables": [
            { "name": "A", "cpt": [0.5] },
            { "name": "B", "parents": ["A"], "cpt": [0.8, 0.3] }
        ]
    }"#;

    #[test]
    fn from_json() {
        let description: NetworkDescription = serde_json::from_str(CHAIN).unwrap();
        let mut model = description.build().unwrap();

        assert_eq!(2, model.len());
        assert_eq!(Some(1), model.index_of("B"));
        assert!((model.joint_probability(&[true, true]).unwrap() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn round_trip_through_network() {
        let model = poker();
        let description = NetworkDescription::from(&model);
        assert_eq!(vec![String::from("B.Bluff"), String::from("B.GoodHand")], description.variables[5].parents);

        let rebuilt = description.build().unwrap();
        assert_eq!(description, NetworkDescription::from(&rebuilt));
    }

    #[test]
    fn forward_reference() {
        let description = NetworkDescription {
            variables: vec![
                VariableDescription { name: String::from("B"), parents: vec![String::from("A")], cpt: vec![0.8, 0.3] },
                VariableDescription { name: String::from("A"), parents: vec![], cpt: vec![0.5] },
            ]
        };

        match description.build() {
            Err(BoolnetError::CyclicOrForwardReference { .. }) => (),
            other => panic!("expected CyclicOrForwardReference, got {:?}", other)
        }
    }
}
