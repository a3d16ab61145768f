//! Built-in question bank

/// Number of options per question
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A multiple-choice question with exactly one correct option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: &'static str,
    pub options: [&'static str; OPTIONS_PER_QUESTION],
    /// Index of the correct option
    pub answer: usize,
}

/// The cyber-security quiz, in presentation order
pub static QUESTIONS: [Question; 12] = [
    Question {
        text: "What is the primary goal of a phishing attack?",
        options: [
            "To crash your computer's operating system.",
            "To manipulate a user into revealing sensitive information.",
            "To monitor your network traffic without authorization.",
            "To permanently delete all files on your hard drive.",
        ],
        answer: 1,
    },
    Question {
        text: "Which characteristic is most important for creating a strong and secure password?",
        options: [
            "Using a combination of your name and birthday.",
            "Ensuring it is at least 15 characters long and includes a random mix of characters.",
            "Changing it frequently, such as every two weeks.",
            "Using the same password across all your accounts for ease of recall.",
        ],
        answer: 1,
    },
    Question {
        text: "What type of malicious software encrypts a user's files and demands payment to restore access?",
        options: ["Spyware", "Adware", "Ransomware", "Trojan Horse"],
        answer: 2,
    },
    Question {
        text: "What security measure requires a user to provide two or more different verification factors to gain access?",
        options: [
            "Single Sign-On (SSO)",
            "Biometric Authentication",
            "Multi-Factor Authentication (MFA)",
            "CAPTCHA",
        ],
        answer: 2,
    },
    Question {
        text: "What does the 's' in https:// stand for in a web address, and why is it important?",
        options: [
            "Search, meaning the site is optimized for search engines.",
            "Secure, meaning the connection is encrypted with SSL/TLS.",
            "Server, meaning the site is hosted on a high-end web server.",
            "Source, meaning the original source code is available.",
        ],
        answer: 1,
    },
    Question {
        text: "An attacker calls an employee pretending to be an IT technician to gain their password. This is an example of what kind of threat?",
        options: [
            "Denial of Service (DoS)",
            "Social Engineering",
            "SQL Injection",
            "Zero-Day Exploit",
        ],
        answer: 1,
    },
    Question {
        text: "What is the primary reason for regularly updating your operating system and applications?",
        options: [
            "To improve aesthetic appeal with new themes and icons.",
            "To install patches for newly discovered security vulnerabilities.",
            "To reduce the amount of memory (RAM) used by the system.",
            "To increase compatibility with older, outdated hardware.",
        ],
        answer: 1,
    },
    Question {
        text: "When connecting to public Wi-Fi, what tool should you always use to protect your data?",
        options: [
            "A standard anti-virus program.",
            "An extra-long password.",
            "A Virtual Private Network (VPN).",
            "A firewall device.",
        ],
        answer: 2,
    },
    Question {
        text: "Why is maintaining offline or cloud backups of your important files vital?",
        options: [
            "It helps prevent malware infection.",
            "It allows you to restore data after incidents like ransomware or hardware failure.",
            "It detects phishing emails automatically.",
            "It is required for all operating systems.",
        ],
        answer: 1,
    },
    Question {
        text: "Before clicking a link in an email, which part of the URL should you verify?",
        options: [
            "The protocol prefix (http:// or https://).",
            "The file name or path after the domain.",
            "The domain name (e.g., google.com in mail.google.com).",
            "The first two characters of the link.",
        ],
        answer: 2,
    },
    Question {
        text: "If you receive an unexpected email from your bank asking to verify your account, what should you do?",
        options: [
            "Click the link and log in immediately.",
            "Reply asking for confirmation.",
            "Open a new browser and visit the bank’s official site directly.",
            "Forward it to a friend.",
        ],
        answer: 2,
    },
    Question {
        text: "When setting up a new IoT device, what is the most important initial step?",
        options: [
            "Changing the factory default username and password.",
            "Connecting it to a guest Wi-Fi network.",
            "Downloading a mobile anti-virus app.",
            "Enabling Bluetooth.",
        ],
        answer: 0,
    },
];
