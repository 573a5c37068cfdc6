// Basic types for key and signature operations
pub type Address = String;
pub type PublicKey = String;
pub type SignatureHex = String;

// Result type for better error handling
pub type WalletResult<T> = Result<T, crate::shared::error::WalletError>;
