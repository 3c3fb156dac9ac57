//! The canned analysis played back by the demo.
//!
//! This is sample data, not the output of any computation. A real analysis
//! backend would define its own contract.

/// Overall risk rating of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    MediumHigh,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::MediumHigh => "Medium-High",
            Self::High => "High",
        }
    }

    /// Text and background classes for the risk banner.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Low => Tone::GREEN,
            Self::Medium => Tone::AMBER,
            Self::MediumHigh => Tone::ORANGE,
            Self::High => Tone::RED,
        }
    }
}

/// Classification of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    HighRisk,
    MediumRisk,
    Standard,
    Fair,
}

impl Severity {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighRisk => "⚠️ High Risk",
            Self::MediumRisk => "⚠️ Medium Risk",
            Self::Standard => "✅ Standard",
            Self::Fair => "✅ Fair",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::HighRisk => Tone::RED,
            Self::MediumRisk => Tone::ORANGE,
            Self::Standard | Self::Fair => Tone::GREEN,
        }
    }

    /// Whether the finding calls for attention.
    #[must_use]
    pub const fn is_concern(self) -> bool {
        matches!(self, Self::HighRisk | Self::MediumRisk)
    }
}

/// A text/background/border class triple. These colors carry meaning, so
/// they do not change with the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub text: &'static str,
    pub background: &'static str,
    pub border: &'static str,
}

impl Tone {
    pub const GREEN: Tone = Tone {
        text: "text-green-600",
        background: "bg-green-50",
        border: "border-green-200",
    };
    pub const AMBER: Tone = Tone {
        text: "text-amber-600",
        background: "bg-amber-50",
        border: "border-amber-200",
    };
    pub const ORANGE: Tone = Tone {
        text: "text-orange-600",
        background: "bg-orange-100",
        border: "border-orange-200",
    };
    pub const RED: Tone = Tone {
        text: "text-red-600",
        background: "bg-red-50",
        border: "border-red-200",
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub detail: &'static str,
}

/// One scripted question and its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QaExchange {
    pub question: &'static str,
    pub answer: &'static str,
}

/// The document the demo pretends to have received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleDocument {
    pub file_name: &'static str,
    pub size_label: &'static str,
    pub extracted_text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentAnalysis {
    pub document: SampleDocument,
    pub summary: &'static str,
    pub risk: RiskLevel,
    pub findings: &'static [Finding],
    pub recommendations: &'static [&'static str],
    pub exchange: QaExchange,
}

impl DocumentAnalysis {
    /// Number of findings that call for attention.
    #[must_use]
    pub fn concern_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity.is_concern())
            .count()
    }
}

const EXTRACTED_TEXT: &str = "EMPLOYMENT AGREEMENT

This Employment Agreement (\"Agreement\") is entered into on January 15, 2024, between TechCorp Solutions Inc., a Delaware corporation (\"Company\"), and John Smith (\"Employee\").

1. POSITION AND DUTIES
Employee shall serve as Senior Software Developer and shall perform such duties as are customarily associated with such position.

2. COMPENSATION
Company shall pay Employee a base salary of $85,000 per annum, payable in bi-weekly installments.

3. CONFIDENTIALITY AND NON-COMPETE
Employee agrees not to disclose any confidential information and shall not engage in any competing business for a period of 24 months following termination.

4. TERMINATION
Either party may terminate this agreement with 30 days written notice. Upon termination for cause, Company may terminate immediately without notice or severance pay.

5. GOVERNING LAW
This Agreement shall be governed by the laws of the State of Delaware.";

/// The analysis revealed at the end of the demo.
pub static SAMPLE_ANALYSIS: DocumentAnalysis = DocumentAnalysis {
    document: SampleDocument {
        file_name: "employment_agreement.pdf",
        size_label: "1.2 MB",
        extracted_text: EXTRACTED_TEXT,
    },
    summary: "This is a standard employment agreement with several concerning clauses that heavily favor the employer. The contract includes restrictive non-compete terms and allows immediate termination without severance in certain circumstances.",
    risk: RiskLevel::MediumHigh,
    findings: &[
        Finding {
            severity: Severity::HighRisk,
            detail: "24-month non-compete clause is unusually long and may limit future employment opportunities",
        },
        Finding {
            severity: Severity::MediumRisk,
            detail: "Termination 'for cause' allows immediate dismissal without severance pay",
        },
        Finding {
            severity: Severity::Standard,
            detail: "30-day notice period for regular termination is reasonable",
        },
        Finding {
            severity: Severity::Fair,
            detail: "Base salary of $85,000 is within market range for the position",
        },
    ],
    recommendations: &[
        "Negotiate to reduce non-compete period from 24 months to 6-12 months",
        "Request definition of 'cause' for termination to be more specific",
        "Consider adding severance pay clause for termination without cause",
        "Clarify what constitutes 'confidential information'",
    ],
    exchange: QaExchange {
        question: "@gemini please explain the term 'non-compete clause'",
        answer: "A non-compete clause is a contractual agreement that prohibits an employee from working for competitors or starting a competing business for a specified period after leaving their current job. In your contract, this clause prevents you from engaging in any competing business for 24 months after termination. This is considered quite restrictive - typical non-compete periods range from 6-12 months. The 24-month duration could significantly limit your career opportunities and earning potential. I recommend negotiating this down to a shorter period, ideally 6-12 months, which is more reasonable and industry-standard.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_rated_medium_high() {
        assert_eq!(SAMPLE_ANALYSIS.risk.label(), "Medium-High");
        assert_eq!(SAMPLE_ANALYSIS.risk.tone(), Tone::ORANGE);
    }

    #[test]
    fn sample_has_four_findings_two_of_concern() {
        assert_eq!(SAMPLE_ANALYSIS.findings.len(), 4);
        assert_eq!(SAMPLE_ANALYSIS.concern_count(), 2);
        assert_eq!(SAMPLE_ANALYSIS.recommendations.len(), 4);
    }

    #[test]
    fn extracted_text_opens_with_title() {
        assert!(
            SAMPLE_ANALYSIS
                .document
                .extracted_text
                .starts_with("EMPLOYMENT AGREEMENT")
        );
        assert!(SAMPLE_ANALYSIS.exchange.answer.contains("24 months"));
    }

    #[test]
    fn severity_tones() {
        assert_eq!(Severity::HighRisk.tone().text, "text-red-600");
        assert_eq!(Severity::Fair.tone().background, "bg-green-50");
        assert!(!Severity::Standard.is_concern());
    }
}
