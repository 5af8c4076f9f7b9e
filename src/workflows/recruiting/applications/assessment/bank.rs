use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::category::AssessmentCategory;

/// Questions drawn per assessment when the bank is large enough.
pub const DEFAULT_SAMPLE_SIZE: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A weighted multiple-choice question. Option order is display order and the
/// basis of answer comparison; `correct_index` must index into `options`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub text: &'static str,
    pub options: &'static [&'static str],
    pub correct_index: usize,
    pub points: u32,
    pub difficulty: Difficulty,
}

impl Question {
    pub fn correct_option(&self) -> &'static str {
        self.options[self.correct_index]
    }
}

/// Fixed in-memory question catalog, partitioned by category.
pub struct QuestionBank;

impl QuestionBank {
    pub fn questions_for(category: AssessmentCategory) -> &'static [Question] {
        match category {
            AssessmentCategory::BranchManager => &BRANCH_MANAGER,
            AssessmentCategory::OperationsManagement => &OPERATIONS_MANAGEMENT,
            AssessmentCategory::CustomerRelations => &CUSTOMER_RELATIONS,
            AssessmentCategory::BankingFundamentals => &BANKING_FUNDAMENTALS,
        }
    }

    /// Uniform random sample without replacement of `min(count, bank size)`
    /// questions, in randomized display order.
    pub fn sample(category: AssessmentCategory, count: usize) -> Vec<Question> {
        Self::sample_with(category, count, &mut rand::thread_rng())
    }

    pub fn sample_with<R: Rng + ?Sized>(
        category: AssessmentCategory,
        count: usize,
        rng: &mut R,
    ) -> Vec<Question> {
        let mut drawn = Self::questions_for(category).to_vec();
        drawn.shuffle(rng);
        drawn.truncate(count);
        drawn
    }
}

static BRANCH_MANAGER: [Question; 12] = [
    Question {
        text: "What is the primary responsibility of a Branch Manager?",
        options: &[
            "Only sales targets",
            "Overall branch operations and team management",
            "Customer complaints only",
            "Documentation",
        ],
        correct_index: 1,
        points: 7,
        difficulty: Difficulty::Easy,
    },
    Question {
        text: "Which financial ratio is most important for branch profitability analysis?",
        options: &[
            "Current Ratio",
            "Return on Assets (ROA)",
            "Debt-to-Equity",
            "Inventory Turnover",
        ],
        correct_index: 1,
        points: 8,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "How do you handle a situation where your branch is consistently missing sales targets?",
        options: &[
            "Blame the market",
            "Analyze performance data and implement improvement strategies",
            "Reduce staff",
            "Lower targets",
        ],
        correct_index: 1,
        points: 10,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "What is the key to effective team leadership in banking?",
        options: &[
            "Strict rules only",
            "Communication, motivation, and performance monitoring",
            "Individual work",
            "Avoiding conflicts",
        ],
        correct_index: 1,
        points: 8,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "Which compliance regulation is most critical for branch operations?",
        options: &[
            "Tax laws only",
            "Anti-Money Laundering (AML) and KYC",
            "Employment laws",
            "Building codes",
        ],
        correct_index: 1,
        points: 9,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "How do you ensure customer satisfaction while maintaining profitability?",
        options: &[
            "Focus only on profits",
            "Balance quality service with efficient operations",
            "Ignore profitability",
            "Reduce services",
        ],
        correct_index: 1,
        points: 10,
        difficulty: Difficulty::Hard,
    },
    Question {
        text: "What is the best approach to handle a major customer complaint?",
        options: &[
            "Ignore it",
            "Listen, investigate, resolve, and follow up",
            "Transfer to head office",
            "Offer money immediately",
        ],
        correct_index: 1,
        points: 8,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "Which metric best indicates branch performance?",
        options: &[
            "Number of employees",
            "Customer satisfaction + financial targets achievement",
            "Building size",
            "Number of transactions",
        ],
        correct_index: 1,
        points: 9,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "How do you motivate underperforming team members?",
        options: &[
            "Threaten termination",
            "Provide training, set clear goals, and regular feedback",
            "Ignore them",
            "Reduce their responsibilities",
        ],
        correct_index: 1,
        points: 8,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "What is the most effective way to increase branch deposits?",
        options: &[
            "Force existing customers",
            "Develop relationship-based marketing and competitive products",
            "Reduce interest rates",
            "Limit services",
        ],
        correct_index: 1,
        points: 10,
        difficulty: Difficulty::Hard,
    },
    Question {
        text: "How do you ensure regulatory compliance in daily operations?",
        options: &[
            "Ignore regulations",
            "Regular training, monitoring, and audit systems",
            "One-time training",
            "External consultants only",
        ],
        correct_index: 1,
        points: 9,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "What is your approach to risk management in branch operations?",
        options: &[
            "Avoid all risks",
            "Identify, assess, monitor, and mitigate risks systematically",
            "Accept all risks",
            "Transfer all risks",
        ],
        correct_index: 1,
        points: 10,
        difficulty: Difficulty::Hard,
    },
];

static OPERATIONS_MANAGEMENT: [Question; 12] = [
    Question {
        text: "What is the primary focus of operations management in banking?",
        options: &[
            "Sales only",
            "Process efficiency and quality control",
            "Marketing",
            "HR management",
        ],
        correct_index: 1,
        points: 7,
        difficulty: Difficulty::Easy,
    },
    Question {
        text: "Which tool is most effective for process improvement?",
        options: &[
            "Guesswork",
            "Six Sigma and Lean methodologies",
            "Random changes",
            "External consultants",
        ],
        correct_index: 1,
        points: 8,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "How do you identify operational bottlenecks?",
        options: &[
            "Ignore delays",
            "Data analysis and process mapping",
            "Ask customers only",
            "Guess the problems",
        ],
        correct_index: 1,
        points: 9,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "What is the key to effective vendor management?",
        options: &[
            "Lowest price only",
            "Performance monitoring and relationship management",
            "No monitoring",
            "Multiple vendors for same service",
        ],
        correct_index: 1,
        points: 8,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "How do you ensure operational compliance?",
        options: &[
            "Ignore policies",
            "Regular audits and process documentation",
            "One-time setup",
            "External audits only",
        ],
        correct_index: 1,
        points: 9,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "Which metric best measures operational efficiency?",
        options: &[
            "Number of employees",
            "Process completion time and error rates",
            "Office size",
            "Number of meetings",
        ],
        correct_index: 1,
        points: 8,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "How do you handle system downtime in critical operations?",
        options: &[
            "Wait for IT",
            "Activate business continuity plan and backup procedures",
            "Close operations",
            "Ignore the issue",
        ],
        correct_index: 1,
        points: 10,
        difficulty: Difficulty::Hard,
    },
    Question {
        text: "What is the best approach to implement new operational procedures?",
        options: &[
            "Force implementation",
            "Pilot testing, training, and gradual rollout",
            "Immediate full implementation",
            "Ignore change management",
        ],
        correct_index: 1,
        points: 9,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "How do you ensure quality control in banking operations?",
        options: &[
            "No checks needed",
            "Regular quality audits and error tracking",
            "Customer complaints only",
            "Annual reviews only",
        ],
        correct_index: 1,
        points: 8,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "What is your approach to cost optimization in operations?",
        options: &[
            "Cut all costs",
            "Analyze cost-benefit and eliminate waste while maintaining quality",
            "Increase all costs",
            "Ignore costs",
        ],
        correct_index: 1,
        points: 10,
        difficulty: Difficulty::Hard,
    },
    Question {
        text: "How do you manage operational risks?",
        options: &[
            "Ignore risks",
            "Risk assessment, mitigation plans, and monitoring",
            "Accept all risks",
            "External insurance only",
        ],
        correct_index: 1,
        points: 9,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "What is the key to successful cross-departmental coordination?",
        options: &[
            "Work in isolation",
            "Clear communication and defined processes",
            "Avoid other departments",
            "Email only communication",
        ],
        correct_index: 1,
        points: 8,
        difficulty: Difficulty::Medium,
    },
];

static CUSTOMER_RELATIONS: [Question; 12] = [
    Question {
        text: "What is the most important skill for a Customer Relationship Officer?",
        options: &[
            "Technical knowledge only",
            "Active listening and empathy",
            "Sales pressure",
            "Product memorization",
        ],
        correct_index: 1,
        points: 7,
        difficulty: Difficulty::Easy,
    },
    Question {
        text: "How do you handle a customer who is upset about service charges?",
        options: &[
            "Argue with them",
            "Listen, explain the policy, and find solutions within guidelines",
            "Ignore their concern",
            "Immediately waive all charges",
        ],
        correct_index: 1,
        points: 8,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "What is the best way to build long-term customer relationships?",
        options: &[
            "One-time sales",
            "Consistent service, trust-building, and understanding needs",
            "Aggressive selling",
            "Minimal contact",
        ],
        correct_index: 1,
        points: 9,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "How do you identify cross-selling opportunities?",
        options: &[
            "Random offers",
            "Analyze customer needs and financial goals",
            "Sell most expensive products",
            "Wait for customers to ask",
        ],
        correct_index: 1,
        points: 8,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "What is your approach to handling customer complaints?",
        options: &[
            "Deny responsibility",
            "Listen, investigate, resolve, and prevent recurrence",
            "Transfer to manager",
            "Ignore complaints",
        ],
        correct_index: 1,
        points: 9,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "How do you maintain customer confidentiality?",
        options: &[
            "Share information freely",
            "Strict adherence to privacy policies and need-to-know basis",
            "Discuss with colleagues",
            "Post on social media",
        ],
        correct_index: 1,
        points: 10,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "What is the key to effective customer education about products?",
        options: &[
            "Complex jargon",
            "Simple, clear explanations with relevant examples",
            "Quick information",
            "Technical details only",
        ],
        correct_index: 1,
        points: 8,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "How do you handle rejection when offering products?",
        options: &[
            "Pressure the customer",
            "Understand reasons and maintain positive relationship",
            "Get angry",
            "Never offer again",
        ],
        correct_index: 1,
        points: 7,
        difficulty: Difficulty::Easy,
    },
    Question {
        text: "What is your strategy for customer retention?",
        options: &[
            "Price cuts only",
            "Exceptional service, regular follow-up, and value addition",
            "Ignore existing customers",
            "Focus on new customers only",
        ],
        correct_index: 1,
        points: 9,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "How do you stay updated with banking products and services?",
        options: &[
            "Never update",
            "Regular training, product manuals, and market research",
            "Ask customers",
            "Guess the features",
        ],
        correct_index: 1,
        points: 8,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "What is your approach to managing customer expectations?",
        options: &[
            "Overpromise",
            "Set realistic expectations and deliver consistently",
            "Underpromise",
            "Make no commitments",
        ],
        correct_index: 1,
        points: 9,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "How do you measure success in customer relationship management?",
        options: &[
            "Number of calls",
            "Customer satisfaction, retention, and business growth",
            "Time spent",
            "Number of products sold",
        ],
        correct_index: 1,
        points: 10,
        difficulty: Difficulty::Hard,
    },
];

static BANKING_FUNDAMENTALS: [Question; 12] = [
    Question {
        text: "What is the primary function of a commercial bank?",
        options: &[
            "Investment trading",
            "Accepting deposits and providing loans",
            "Insurance sales",
            "Real estate development",
        ],
        correct_index: 1,
        points: 7,
        difficulty: Difficulty::Easy,
    },
    Question {
        text: "What does KYC stand for in banking?",
        options: &[
            "Know Your Customer",
            "Keep Your Cash",
            "Key Yield Calculation",
            "Know Your Credit",
        ],
        correct_index: 0,
        points: 6,
        difficulty: Difficulty::Easy,
    },
    Question {
        text: "Which document is NOT typically required for opening a bank account in Pakistan?",
        options: &[
            "CNIC",
            "Utility bill",
            "Salary certificate",
            "Marriage certificate",
        ],
        correct_index: 3,
        points: 7,
        difficulty: Difficulty::Easy,
    },
    Question {
        text: "What is the current policy rate set by State Bank of Pakistan (approximate)?",
        options: &["10%", "15%", "22%", "25%"],
        correct_index: 2,
        points: 8,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "Which ratio measures a bank's ability to meet short-term obligations?",
        options: &[
            "Capital Adequacy Ratio",
            "Liquidity Coverage Ratio",
            "Profit Margin",
            "Return on Assets",
        ],
        correct_index: 1,
        points: 9,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "What is the minimum Capital Adequacy Ratio required by SBP?",
        options: &["8%", "10%", "12%", "15%"],
        correct_index: 1,
        points: 8,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "Which type of account typically offers the highest interest rate?",
        options: &[
            "Current Account",
            "Savings Account",
            "Term Deposit",
            "Business Account",
        ],
        correct_index: 2,
        points: 7,
        difficulty: Difficulty::Easy,
    },
    Question {
        text: "What is the maximum amount insured by Deposit Protection Corporation (DPC) in Pakistan?",
        options: &[
            "PKR 250,000",
            "PKR 500,000",
            "PKR 1,000,000",
            "PKR 2,000,000",
        ],
        correct_index: 1,
        points: 9,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "Which of the following is a non-performing loan (NPL)?",
        options: &[
            "Loan paid on time",
            "Loan overdue by 60 days",
            "Loan overdue by 90+ days",
            "Prepaid loan",
        ],
        correct_index: 2,
        points: 8,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "What does SWIFT stand for in international banking?",
        options: &[
            "Secure Wire International Financial Transfer",
            "Society for Worldwide Interbank Financial Telecommunication",
            "Standard Wire International Fund Transfer",
            "Secure Worldwide International Financial Transfer",
        ],
        correct_index: 1,
        points: 9,
        difficulty: Difficulty::Medium,
    },
    Question {
        text: "Which is the central bank of Pakistan?",
        options: &[
            "National Bank of Pakistan",
            "State Bank of Pakistan",
            "United Bank Limited",
            "Bank Alfalah",
        ],
        correct_index: 1,
        points: 6,
        difficulty: Difficulty::Easy,
    },
    Question {
        text: "What is the primary purpose of Anti-Money Laundering (AML) regulations?",
        options: &[
            "Increase bank profits",
            "Prevent illegal money from entering the financial system",
            "Reduce customer service time",
            "Eliminate cash transactions",
        ],
        correct_index: 1,
        points: 10,
        difficulty: Difficulty::Hard,
    },
];
