//! Risk classification enumerations shared by sign-in activity types.
//!
//! All three are evolvable: strings added server-side after this client was
//! built resolve to `UnknownFutureValue` instead of failing the decode.

use graph_serialization::WireEnum;

/// Why a detected risk was remediated or dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskDetail {
    None,
    AdminGeneratedTemporaryPassword,
    UserPerformedSecuredPasswordChange,
    UserPerformedSecuredPasswordReset,
    AdminConfirmedSigninSafe,
    AiConfirmedSigninSafe,
    UserPassedMfaDrivenByRiskBasedPolicy,
    AdminDismissedAllRiskForUser,
    AdminConfirmedSigninCompromised,
    Hidden,
    AdminConfirmedUserCompromised,
    UnknownFutureValue,
}

impl WireEnum for RiskDetail {
    const NAME: &'static str = "riskDetail";

    fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::AdminGeneratedTemporaryPassword => "adminGeneratedTemporaryPassword",
            Self::UserPerformedSecuredPasswordChange => "userPerformedSecuredPasswordChange",
            Self::UserPerformedSecuredPasswordReset => "userPerformedSecuredPasswordReset",
            Self::AdminConfirmedSigninSafe => "adminConfirmedSigninSafe",
            Self::AiConfirmedSigninSafe => "aiConfirmedSigninSafe",
            Self::UserPassedMfaDrivenByRiskBasedPolicy => "userPassedMFADrivenByRiskBasedPolicy",
            Self::AdminDismissedAllRiskForUser => "adminDismissedAllRiskForUser",
            Self::AdminConfirmedSigninCompromised => "adminConfirmedSigninCompromised",
            Self::Hidden => "hidden",
            Self::AdminConfirmedUserCompromised => "adminConfirmedUserCompromised",
            Self::UnknownFutureValue => "unknownFutureValue",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "none" => Self::None,
            "adminGeneratedTemporaryPassword" => Self::AdminGeneratedTemporaryPassword,
            "userPerformedSecuredPasswordChange" => Self::UserPerformedSecuredPasswordChange,
            "userPerformedSecuredPasswordReset" => Self::UserPerformedSecuredPasswordReset,
            "adminConfirmedSigninSafe" => Self::AdminConfirmedSigninSafe,
            "aiConfirmedSigninSafe" => Self::AiConfirmedSigninSafe,
            "userPassedMFADrivenByRiskBasedPolicy" => Self::UserPassedMfaDrivenByRiskBasedPolicy,
            "adminDismissedAllRiskForUser" => Self::AdminDismissedAllRiskForUser,
            "adminConfirmedSigninCompromised" => Self::AdminConfirmedSigninCompromised,
            "hidden" => Self::Hidden,
            "adminConfirmedUserCompromised" => Self::AdminConfirmedUserCompromised,
            _ => Self::UnknownFutureValue,
        })
    }
}

/// Risk severity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Hidden,
    None,
    UnknownFutureValue,
}

impl WireEnum for RiskLevel {
    const NAME: &'static str = "riskLevel";

    fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Hidden => "hidden",
            Self::None => "none",
            Self::UnknownFutureValue => "unknownFutureValue",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            "hidden" => Self::Hidden,
            "none" => Self::None,
            _ => Self::UnknownFutureValue,
        })
    }
}

/// Current state of a detected risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskState {
    None,
    ConfirmedSafe,
    Remediated,
    Dismissed,
    AtRisk,
    ConfirmedCompromised,
    UnknownFutureValue,
}

impl WireEnum for RiskState {
    const NAME: &'static str = "riskState";

    fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ConfirmedSafe => "confirmedSafe",
            Self::Remediated => "remediated",
            Self::Dismissed => "dismissed",
            Self::AtRisk => "atRisk",
            Self::ConfirmedCompromised => "confirmedCompromised",
            Self::UnknownFutureValue => "unknownFutureValue",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "none" => Self::None,
            "confirmedSafe" => Self::ConfirmedSafe,
            "remediated" => Self::Remediated,
            "dismissed" => Self::Dismissed,
            "atRisk" => Self::AtRisk,
            "confirmedCompromised" => Self::ConfirmedCompromised,
            _ => Self::UnknownFutureValue,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_detail_string_codec_is_bijective() {
        let members = [
            RiskDetail::None,
            RiskDetail::AdminGeneratedTemporaryPassword,
            RiskDetail::UserPerformedSecuredPasswordChange,
            RiskDetail::UserPerformedSecuredPasswordReset,
            RiskDetail::AdminConfirmedSigninSafe,
            RiskDetail::AiConfirmedSigninSafe,
            RiskDetail::UserPassedMfaDrivenByRiskBasedPolicy,
            RiskDetail::AdminDismissedAllRiskForUser,
            RiskDetail::AdminConfirmedSigninCompromised,
            RiskDetail::Hidden,
            RiskDetail::AdminConfirmedUserCompromised,
            RiskDetail::UnknownFutureValue,
        ];
        for m in members {
            assert_eq!(RiskDetail::parse(m.as_str()), Some(m));
        }
    }

    #[test]
    fn risk_level_string_codec_is_bijective() {
        let members = [
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Hidden,
            RiskLevel::None,
            RiskLevel::UnknownFutureValue,
        ];
        for m in members {
            assert_eq!(RiskLevel::parse(m.as_str()), Some(m));
        }
    }

    #[test]
    fn risk_state_string_codec_is_bijective() {
        let members = [
            RiskState::None,
            RiskState::ConfirmedSafe,
            RiskState::Remediated,
            RiskState::Dismissed,
            RiskState::AtRisk,
            RiskState::ConfirmedCompromised,
            RiskState::UnknownFutureValue,
        ];
        for m in members {
            assert_eq!(RiskState::parse(m.as_str()), Some(m));
        }
    }

    #[test]
    fn server_added_values_resolve_to_the_catch_all() {
        assert_eq!(
            RiskDetail::parse("somethingNewFromTheService"),
            Some(RiskDetail::UnknownFutureValue)
        );
        assert_eq!(RiskLevel::parse("critical"), Some(RiskLevel::UnknownFutureValue));
        assert_eq!(RiskState::parse("underReview"), Some(RiskState::UnknownFutureValue));
    }
}
