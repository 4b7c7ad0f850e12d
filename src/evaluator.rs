//! Policy evaluator - combines the rule predicates with the asynchronous
//! word scan and arbitrates between overlapping submissions.
//!
//! Every submission gets a generation number. A finished scan is applied
//! only while its generation is still the newest one, so a stale scan can
//! never overwrite the snapshot of a later submission.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::cache::VerdictCache;
use crate::dictionary::WordLookup;
use crate::rules::{has_correct_length, has_digit, is_alnum_only};
use crate::scanner::WordScanner;

/// Lifecycle of the English-word scan behind a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordScanStatus {
    /// No password has been submitted yet.
    Idle,
    /// A scan for this snapshot's password is still in flight.
    Pending,
    /// The scan finished; `english_words` holds every confirmed English
    /// word in order of appearance.
    Settled { english_words: Vec<String> },
}

/// The policy rules in their fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    CorrectLength,
    ValidCharacters,
    MinimumOneDigit,
    NoEnglishWords,
}

impl Requirement {
    pub fn description(&self) -> &'static str {
        match self {
            Requirement::CorrectLength => "8 characters minimum",
            Requirement::ValidCharacters => "Only latin letters and digits",
            Requirement::MinimumOneDigit => "At least one digit",
            Requirement::NoEnglishWords => "No english words",
        }
    }
}

/// Verdict of a single requirement within a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementStatus {
    pub requirement: Requirement,
    pub satisfied: bool,
}

/// Coarse progress classification of a snapshot, for progressive strength
/// bars: how many requirement bars to fill and in which register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBand {
    /// Nothing typed yet; no bar filled.
    Unset,
    /// Something typed, but the basic rules fail; one bar.
    Invalid,
    /// Part of the rules hold; `bars` bars filled.
    Intermediate { bars: usize },
    /// All four rules hold; every bar filled.
    Valid,
}

/// Rule verdicts for exactly one submitted password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationSnapshot {
    generation: u64,
    pub correct_length: bool,
    pub alnum_only: bool,
    pub contains_digit: bool,
    pub password_empty: bool,
    pub scan: WordScanStatus,
}

impl EvaluationSnapshot {
    fn idle() -> Self {
        Self {
            generation: 0,
            correct_length: false,
            alnum_only: false,
            contains_digit: false,
            password_empty: true,
            scan: WordScanStatus::Idle,
        }
    }

    /// Submission counter this snapshot belongs to. Starts at 1 for the
    /// first submission; 0 is the idle snapshot.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.scan == WordScanStatus::Pending
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.scan, WordScanStatus::Settled { .. })
    }

    /// The confirmed English words, empty unless settled.
    pub fn english_words(&self) -> &[String] {
        match &self.scan {
            WordScanStatus::Settled { english_words } => english_words,
            _ => &[],
        }
    }

    /// Tri-state "contains no English word" verdict: `None` while the scan
    /// has not settled, so a pending scan is never mistaken for a pass.
    pub fn no_english_words(&self) -> Option<bool> {
        match &self.scan {
            WordScanStatus::Settled { english_words } => Some(english_words.is_empty()),
            _ => None,
        }
    }

    fn word_rule_met(&self) -> bool {
        self.no_english_words() == Some(true)
    }

    /// Overall verdict: all four rules hold. False while the word scan is
    /// pending, regardless of the synchronous rules.
    pub fn is_valid(&self) -> bool {
        self.correct_length && self.alnum_only && self.contains_digit && self.word_rule_met()
    }

    /// Per-requirement verdicts in display order.
    pub fn requirements(&self) -> [RequirementStatus; 4] {
        [
            RequirementStatus {
                requirement: Requirement::CorrectLength,
                satisfied: self.correct_length,
            },
            RequirementStatus {
                requirement: Requirement::ValidCharacters,
                satisfied: self.alnum_only,
            },
            RequirementStatus {
                requirement: Requirement::MinimumOneDigit,
                satisfied: self.contains_digit,
            },
            RequirementStatus {
                requirement: Requirement::NoEnglishWords,
                satisfied: self.word_rule_met(),
            },
        ]
    }

    /// Index of the first requirement a progressive UI should render as
    /// inactive. Indices past the last requirement mean none is inactive.
    pub fn first_disabled_index(&self) -> usize {
        let basic_rules = self.correct_length && self.alnum_only && self.contains_digit;
        if basic_rules && self.word_rule_met() {
            5
        } else if basic_rules {
            4
        } else if self.password_empty {
            0
        } else {
            3
        }
    }

    /// Progress classification for strength bars.
    pub fn progress_band(&self) -> ProgressBand {
        let basic_rules = self.correct_length && self.alnum_only && self.contains_digit;
        if basic_rules && self.word_rule_met() {
            ProgressBand::Valid
        } else if basic_rules {
            ProgressBand::Intermediate { bars: 3 }
        } else if self.correct_length && self.alnum_only {
            ProgressBand::Intermediate { bars: 2 }
        } else if !self.password_empty {
            ProgressBand::Invalid
        } else {
            ProgressBand::Unset
        }
    }
}

struct EvaluatorShared {
    scanner: WordScanner,
    generation: AtomicU64,
    active_scan: Mutex<Option<CancellationToken>>,
    snapshot_tx: watch::Sender<EvaluationSnapshot>,
}

/// Evaluates passwords against the policy, one snapshot per submission,
/// latest submission wins.
///
/// Cheap to clone; clones share the verdict cache and the snapshot
/// channel.
#[derive(Clone)]
pub struct PolicyEvaluator {
    shared: Arc<EvaluatorShared>,
}

impl PolicyEvaluator {
    /// Creates an evaluator with a fresh verdict cache.
    pub fn new(lookup: Arc<dyn WordLookup>) -> Self {
        Self::with_cache(lookup, Arc::new(VerdictCache::new()))
    }

    /// Creates an evaluator around an existing verdict cache, so several
    /// evaluators can share one.
    pub fn with_cache(lookup: Arc<dyn WordLookup>, cache: Arc<VerdictCache>) -> Self {
        let (snapshot_tx, _) = watch::channel(EvaluationSnapshot::idle());
        Self {
            shared: Arc::new(EvaluatorShared {
                scanner: WordScanner::new(lookup, cache),
                generation: AtomicU64::new(0),
                active_scan: Mutex::new(None),
                snapshot_tx,
            }),
        }
    }

    /// Subscribes to snapshot updates. The receiver always observes the
    /// newest snapshot; intermediate ones may be skipped.
    pub fn subscribe(&self) -> watch::Receiver<EvaluationSnapshot> {
        self.shared.snapshot_tx.subscribe()
    }

    /// The snapshot for the most recent submission.
    pub fn snapshot(&self) -> EvaluationSnapshot {
        self.shared.snapshot_tx.borrow().clone()
    }

    /// Submits a new password value, superseding any in-flight scan.
    ///
    /// The synchronous rule verdicts are published immediately with the
    /// word scan pending; the scan itself runs on a spawned task and
    /// settles the snapshot once finished, unless a newer submission
    /// arrived in the meantime.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn submit(&self, password: &SecretString) {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let pwd = password.expose_secret();
        let snapshot = EvaluationSnapshot {
            generation,
            correct_length: has_correct_length(pwd),
            alnum_only: is_alnum_only(pwd),
            contains_digit: has_digit(pwd),
            password_empty: pwd.is_empty(),
            scan: WordScanStatus::Pending,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(generation, "password submitted, scan starting");

        // Supersede the previous scan. Cancellation is a resource
        // optimization; the generation check below stays authoritative.
        let token = CancellationToken::new();
        {
            let mut active = self.shared.active_scan.lock().unwrap();
            if let Some(previous) = active.replace(token.clone()) {
                previous.cancel();
            }
        }

        self.shared.snapshot_tx.send_replace(snapshot);

        let shared = Arc::clone(&self.shared);
        let password = SecretString::new(pwd.to_owned().into());
        tokio::spawn(async move {
            let english_words = tokio::select! {
                _ = token.cancelled() => return,
                words = shared.scanner.scan(password.expose_secret()) => words,
            };

            if shared.generation.load(Ordering::SeqCst) != generation {
                #[cfg(feature = "tracing")]
                tracing::debug!(generation, "discarding superseded scan result");
                return;
            }

            shared.snapshot_tx.send_modify(|snapshot| {
                // Re-checked under the channel lock: a newer submission may
                // have been published since the load above.
                if snapshot.generation == generation {
                    snapshot.scan = WordScanStatus::Settled { english_words };
                }
            });
        });
    }
}
