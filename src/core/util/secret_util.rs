pub struct SecretUtil;

impl SecretUtil {
    /// Mask a credential for safe display (keeps last 4 chars).
    pub fn mask(secret: &str) -> String {
        let count = secret.chars().count();
        if count <= 8 {
            return "***".into();
        }
        let tail: String = secret.chars().skip(count - 4).collect();
        format!("***{}", tail)
    }
}
