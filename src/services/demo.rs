// src/services/demo.rs
//! Canned replies served when no completion credential is configured.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Contract,
    Divorce,
    Tenant,
}

impl Topic {
    /// Lookup order. A message naming several topics resolves to the earliest one here.
    pub const ALL: [Topic; 3] = [Topic::Contract, Topic::Divorce, Topic::Tenant];

    pub fn keyword(self) -> &'static str {
        match self {
            Topic::Contract => "contract",
            Topic::Divorce => "divorce",
            Topic::Tenant => "tenant",
        }
    }

    pub fn canned_reply(self) -> &'static str {
        match self {
            Topic::Contract => CONTRACT_REPLY,
            Topic::Divorce => DIVORCE_REPLY,
            Topic::Tenant => TENANT_REPLY,
        }
    }
}

pub fn detect_topic(msg: &str) -> Option<Topic> {
    let msg_lower = msg.to_lowercase();

    Topic::ALL
        .into_iter()
        .find(|topic| msg_lower.contains(topic.keyword()))
}

pub fn demo_reply(msg: &str) -> &'static str {
    detect_topic(msg)
        .map(Topic::canned_reply)
        .unwrap_or(FALLBACK_REPLY)
}

const CONTRACT_REPLY: &str = "Based on your question about contracts, here are some key points:

1. **Elements of a Valid Contract**: A contract requires offer, acceptance, consideration, and intent to create legal relations.

2. **Contract Types**: Contracts can be written, oral, or implied by conduct.

3. **Enforcement**: Contracts are enforceable through breach remedies like damages, specific performance, or injunctions.

**Important Disclaimer**: This is general legal information only. For specific contract issues, consult a qualified attorney in your jurisdiction.";

const DIVORCE_REPLY: &str = "Regarding family law matters:

1. **Grounds for Divorce**: Most jurisdictions allow no-fault divorce based on irreconcilable differences.

2. **Asset Division**: Courts typically divide marital property equitably or equally depending on jurisdiction.

3. **Child Custody**: Decisions prioritize the best interests of the child.

**Important Note**: Family law varies significantly by location. Consult a family law attorney for personalized advice.";

const TENANT_REPLY: &str = "Concerning tenant rights:

1. **Lease Agreements**: Landlords must follow lease terms and local housing laws.

2. **Security Deposits**: Must be held in separate accounts and returned within legal timeframes.

3. **Eviction Process**: Landlords must follow formal eviction procedures; \"self-help\" evictions are illegal.

**Disclaimer**: Tenant-landlord law varies by jurisdiction. Contact a local attorney for specific situations.";

pub const FALLBACK_REPLY: &str = "Thank you for your question about legal matters.

General Legal Information:
- Always seek professional legal advice for serious matters
- Laws vary significantly by jurisdiction
- This AI provides educational information only

Common Legal Areas:
- Contract Law
- Family Law
- Tenant Rights
- Employment Law
- Criminal Law

**Important**: This is not legal advice. Consult a licensed attorney for your specific situation.

To get started, ask me about contract law, family law, tenant rights, or other legal topics.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_matches_its_own_keyword() {
        for topic in Topic::ALL {
            assert_eq!(detect_topic(topic.keyword()), Some(topic));
        }
    }

    #[test]
    fn matches_inside_longer_words() {
        assert_eq!(detect_topic("my subcontractor left"), Some(Topic::Contract));
    }

    #[test]
    fn empty_message_gets_fallback() {
        assert_eq!(demo_reply(""), FALLBACK_REPLY);
    }
}
