/// Pre-admission gate for uploaded content.
///
/// Implementations check that the signer of `content` knows `secret`. The
/// parsing and comparison engine never depends on the outcome; the gate only
/// decides whether an upload is admitted at all.
pub trait SignatureVerifier {
    fn verify(&self, signature: &str, content: &[u8], secret: &str) -> bool;
}

/// Verifier that admits everything.
///
/// Stands in until a cryptographic verifier is injected; swapping it out
/// requires no change to the service or the engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAllVerifier;

impl SignatureVerifier for AcceptAllVerifier {
    fn verify(&self, _signature: &str, _content: &[u8], _secret: &str) -> bool {
        true
    }
}
