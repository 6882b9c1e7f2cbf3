use cosmwasm_std::{StdError, StdResult};

/// Binary (de)serialization of protobuf records.
pub trait BinaryCodec {
    fn marshal<M: prost::Message>(&self, msg: &M) -> StdResult<Vec<u8>>;

    fn unmarshal<M: prost::Message + Default>(&self, bz: &[u8]) -> StdResult<M>;
}

/// Encodes records with their protobuf wire format. Unknown fields are
/// skipped when decoding, so a record may be decoded with an older
/// schema than it was written with.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProtoCodec;

impl BinaryCodec for ProtoCodec {
    fn marshal<M: prost::Message>(&self, msg: &M) -> StdResult<Vec<u8>> {
        let mut bz = Vec::with_capacity(msg.encoded_len());
        msg.encode(&mut bz)
            .map_err(|e| StdError::serialize_err(std::any::type_name::<M>(), e))?;
        Ok(bz)
    }

    fn unmarshal<M: prost::Message + Default>(&self, bz: &[u8]) -> StdResult<M> {
        M::decode(bz).map_err(|e| StdError::parse_err(std::any::type_name::<M>(), e))
    }
}
