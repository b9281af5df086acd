use anchor_lang::prelude::*;
use anchor_lang::solana_program::ed25519_program;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked, load_instruction_at_checked,
};
use crate::constants::*;

/**
 * Claim signature verification
 *
 * The cryptographic check is performed by the runtime's Ed25519 program: a
 * claim transaction carries an Ed25519 verify instruction right before the
 * claim instruction, and the whole transaction fails if that signature is
 * invalid. What remains for this program is to make sure the verified
 * signature is the one that matters, i.e. that the instruction binds the
 * configured signer key, the canonical claim message and the submitted
 * signature bytes.
 *
 * Expected instruction data (single signature, everything inline):
 *
 *   [count = 1][padding][offsets: 7 x u16 LE][pubkey 32][signature 64][message]
 */

/// Parsed `Ed25519SignatureOffsets` entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ed25519SignatureOffsets {
    pub signature_offset: u16,
    pub signature_instruction_index: u16,
    pub public_key_offset: u16,
    pub public_key_instruction_index: u16,
    pub message_data_offset: u16,
    pub message_data_size: u16,
    pub message_instruction_index: u16,
}

impl Ed25519SignatureOffsets {
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() != ED25519_OFFSETS_LEN {
            return None;
        }
        let field = |i: usize| u16::from_le_bytes([data[2 * i], data[2 * i + 1]]);
        Some(Self {
            signature_offset: field(0),
            signature_instruction_index: field(1),
            public_key_offset: field(2),
            public_key_instruction_index: field(3),
            message_data_offset: field(4),
            message_data_size: field(5),
            message_instruction_index: field(6),
        })
    }

    pub fn to_bytes(&self) -> [u8; ED25519_OFFSETS_LEN] {
        let fields = [
            self.signature_offset,
            self.signature_instruction_index,
            self.public_key_offset,
            self.public_key_instruction_index,
            self.message_data_offset,
            self.message_data_size,
            self.message_instruction_index,
        ];
        let mut out = [0u8; ED25519_OFFSETS_LEN];
        for (chunk, value) in out.chunks_exact_mut(2).zip(fields) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        out
    }

    /// All three inputs are read from the verify instruction itself. A
    /// signature referencing another instruction's data is rejected since
    /// that data is not what this program compares against.
    fn is_self_contained(&self) -> bool {
        self.signature_instruction_index == ED25519_CURRENT_INSTRUCTION
            && self.public_key_instruction_index == ED25519_CURRENT_INSTRUCTION
            && self.message_instruction_index == ED25519_CURRENT_INSTRUCTION
    }
}

fn slice_at(data: &[u8], offset: u16, len: usize) -> Option<&[u8]> {
    let start = offset as usize;
    let end = start.checked_add(len)?;
    data.get(start..end)
}

/// Checks raw Ed25519 program instruction data against the expected public
/// key, message and signature. Returns `false` for any malformed input.
pub fn verify_ed25519_data(
    data: &[u8],
    public_key: &[u8],
    message: &[u8],
    signature: &[u8],
) -> bool {
    if public_key.len() != ED25519_PUBKEY_LEN || signature.len() != ED25519_SIGNATURE_LEN {
        return false;
    }
    if data.len() < ED25519_DATA_START || data[0] != 1 {
        return false;
    }
    let Some(offsets) = Ed25519SignatureOffsets::parse(&data[ED25519_HEADER_LEN..ED25519_DATA_START]) else {
        return false;
    };
    if !offsets.is_self_contained() {
        return false;
    }

    let embedded_key = slice_at(data, offsets.public_key_offset, ED25519_PUBKEY_LEN);
    let embedded_signature = slice_at(data, offsets.signature_offset, ED25519_SIGNATURE_LEN);
    let embedded_message = slice_at(
        data,
        offsets.message_data_offset,
        offsets.message_data_size as usize,
    );

    embedded_key == Some(public_key)
        && embedded_signature == Some(signature)
        && embedded_message == Some(message)
}

/// Checks that `ix` is an Ed25519 program instruction verifying `signature`
/// over `message` under `public_key`.
pub fn verify_ed25519_instruction(
    ix: &Instruction,
    public_key: &[u8],
    message: &[u8],
    signature: &[u8],
) -> bool {
    ix.program_id == ed25519_program::ID
        && ix.accounts.is_empty()
        && verify_ed25519_data(&ix.data, public_key, message, signature)
}

/// Builds the instruction data the client sends to the Ed25519 program for a
/// single inline signature.
pub fn ed25519_instruction_data(public_key: &[u8; 32], signature: &[u8; 64], message: &[u8]) -> Vec<u8> {
    let public_key_offset = ED25519_DATA_START;
    let signature_offset = public_key_offset + ED25519_PUBKEY_LEN;
    let message_data_offset = signature_offset + ED25519_SIGNATURE_LEN;

    let offsets = Ed25519SignatureOffsets {
        signature_offset: signature_offset as u16,
        signature_instruction_index: ED25519_CURRENT_INSTRUCTION,
        public_key_offset: public_key_offset as u16,
        public_key_instruction_index: ED25519_CURRENT_INSTRUCTION,
        message_data_offset: message_data_offset as u16,
        message_data_size: message.len() as u16,
        message_instruction_index: ED25519_CURRENT_INSTRUCTION,
    };

    let mut data = Vec::with_capacity(message_data_offset + message.len());
    data.push(1);
    data.push(0);
    data.extend_from_slice(&offsets.to_bytes());
    data.extend_from_slice(public_key);
    data.extend_from_slice(signature);
    data.extend_from_slice(message);
    data
}

/// Loads the instruction right before the currently executing one, if any
pub fn load_preceding_instruction(instructions_sysvar: &AccountInfo) -> Result<Option<Instruction>> {
    let current_index = load_current_index_checked(instructions_sysvar)?;
    if current_index == 0 {
        return Ok(None);
    }
    let ix = load_instruction_at_checked(current_index as usize - 1, instructions_sysvar)?;
    Ok(Some(ix))
}
