use super::{AccountApi, AccountSummary, ApiError, CreateAccountRequest, CreateAccountResponse};
use crate::config::RemoteConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::Duration;

const ACCOUNT_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ACCOUNT_ID_LEN: usize = 9;

pub const FAILURE_MESSAGE: &str = "Failed to create account. Please try again.";
pub const SUCCESS_MESSAGE: &str = "Account created successfully";

/// Stand-in for a real backend: waits `delay`, then fails with probability
/// `failure_rate`. There is no retry, backoff or timeout.
pub struct StubAccountApi {
    delay: Duration,
    failure_rate: f64,
    rng: Mutex<StdRng>,
}

impl StubAccountApi {
    pub fn new(delay: Duration, failure_rate: f64) -> Self {
        Self {
            delay,
            failure_rate: sanitize_rate(failure_rate),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn from_config(config: &RemoteConfig) -> Self {
        let api = Self::new(Duration::from_millis(config.delay_ms), config.failure_rate);
        match config.seed {
            Some(seed) => api.with_seed(seed),
            None => api,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }
}

impl AccountApi for StubAccountApi {
    fn create_account(
        &self,
        request: &CreateAccountRequest,
    ) -> Result<CreateAccountResponse, ApiError> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let (fails, account_id) = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            let fails = rng.gen_bool(self.failure_rate);
            (fails, generate_account_id(&mut *rng))
        };

        if fails {
            tracing::debug!(nickname = %request.nickname, "stub rejected account creation");
            return Err(ApiError::Rejected(FAILURE_MESSAGE.to_string()));
        }

        Ok(CreateAccountResponse {
            success: true,
            account_id,
            message: SUCCESS_MESSAGE.to_string(),
            account: AccountSummary::from(request),
        })
    }
}

fn sanitize_rate(rate: f64) -> f64 {
    if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) }
}

fn generate_account_id(rng: &mut impl Rng) -> String {
    let suffix = (0..ACCOUNT_ID_LEN)
        .map(|_| char::from(ACCOUNT_ID_ALPHABET[rng.gen_range(0..ACCOUNT_ID_ALPHABET.len())]))
        .collect::<String>();
    format!("acc_{suffix}")
}
