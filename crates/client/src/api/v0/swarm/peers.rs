use bytes::Bytes;
use serde::Deserialize;

use common::prelude::{MultiHash, MultiHashError};

use crate::api::client::{decode_json, null_as_default, ApiError, ApiRequest, Call, WireShape};

/// List the peers with open connections.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PeersRequest;

/// A connected peer and the address the connection runs over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwarmPeer {
    /// Multiaddr of the connection, without the trailing peer id
    pub addr: String,
    pub peer: MultiHash,
}

/**
 * Daemons report connections in one of two shapes:
 *  - `{"Peers":[{"Addr":"/ip4/…","Peer":"Qm…"}]}`
 *  - `{"Strings":["/ip4/…/ipfs/Qm…"]}` on older releases,
 *    where the peer id is the last component of the address
 */
#[derive(Debug, Deserialize)]
struct PeersWire {
    #[serde(rename = "Peers", default, deserialize_with = "null_as_default")]
    peers: Vec<PeerWire>,
    #[serde(rename = "Strings", default, deserialize_with = "null_as_default")]
    strings: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PeerWire {
    #[serde(rename = "Addr", default)]
    addr: String,
    #[serde(rename = "Peer")]
    peer: String,
}

fn split_peer_addr(full: &str) -> Result<SwarmPeer, MultiHashError> {
    let (addr, peer) = ["/p2p/", "/ipfs/"]
        .iter()
        .find_map(|marker| full.rsplit_once(marker))
        .unwrap_or(("", full));

    Ok(SwarmPeer {
        addr: addr.to_string(),
        peer: peer.parse()?,
    })
}

impl WireShape for PeersWire {
    type Domain = Vec<SwarmPeer>;

    fn into_domain(self) -> Result<Self::Domain, MultiHashError> {
        let connected = self.peers.into_iter().map(|peer| {
            Ok(SwarmPeer {
                addr: peer.addr,
                peer: peer.peer.parse()?,
            })
        });
        let legacy = self.strings.iter().map(|full| split_peer_addr(full));
        connected.chain(legacy).collect()
    }
}

impl ApiRequest for PeersRequest {
    type Response = Vec<SwarmPeer>;

    fn build_call(&self) -> Result<Call, ApiError> {
        Ok(Call::new("swarm/peers"))
    }

    fn decode(body: Bytes) -> Result<Self::Response, ApiError> {
        decode_json::<PeersWire>(&body)
    }
}
