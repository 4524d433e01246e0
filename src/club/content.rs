//! Static copy shown by the club sections.

pub const CHAPTER_NAME: &str = "WiCyS UAlberta Student Chapter";
pub const CONTACT_EMAIL: &str = "wicys@ualberta.ca";
pub const COPYRIGHT: &str =
    "\u{a9} 2025 Women in Cybersecurity University of Alberta Student Chapter. All rights reserved.";

pub const HERO_TAGLINE: &str = "Welcome to the Future of Cybersecurity";
pub const HERO_HEADLINE: [&str; 3] = ["Join the", "WiCyS", "Community"];
pub const HERO_BLURB: &str = "Join a thriving community of cybersecurity enthusiasts. Learn, compete, and grow with hands-on experiences and industry experts.";

pub const MEMBERSHIP_URL: &str = "https://campus.hellorubric.com/?s=11472";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Students,
    Events,
    Community,
}

#[derive(Debug, Clone, Copy)]
pub struct StatCard {
    pub kind: StatKind,
    pub label: &'static str,
    pub caption: &'static str,
}

pub const STAT_CARDS: [StatCard; 3] = [
    StatCard {
        kind: StatKind::Students,
        label: "High School Students Helped",
        caption: "The next generation of cybersecurity professionals",
    },
    StatCard {
        kind: StatKind::Events,
        label: "Events Hosted",
        caption: "Workshops, CTFs, and meetups",
    },
    StatCard {
        kind: StatKind::Community,
        label: "Community Members Supported",
        caption: "Supporting lifelong learning in our community",
    },
];

/// A "What We Offer" card. `figure` pairs a live counter with its label.
#[derive(Debug, Clone, Copy)]
pub struct Offering {
    pub title: &'static str,
    pub body: &'static str,
    pub figure: Option<(StatKind, &'static str)>,
}

pub const OFFERINGS: [Offering; 6] = [
    Offering {
        title: "CTF Competitions",
        body: "Challenge yourself with weekly capture the flag events. Compete with peers, solve complex security challenges, and climb the leaderboard.",
        figure: Some((StatKind::Community, "Winners")),
    },
    Offering {
        title: "Guest Speakers",
        body: "Learn from industry professionals and cybersecurity experts",
        figure: None,
    },
    Offering {
        title: "Vibrant Community",
        body: "Connect with like-minded individuals in cybersecurity",
        figure: None,
    },
    Offering {
        title: "Hands-on Workshops",
        body: "Build practical skills through interactive learning sessions. From beginner to advanced topics.",
        figure: Some((StatKind::Events, "Events")),
    },
    Offering {
        title: "Certifications",
        body: "Earn recognition for your cybersecurity achievements",
        figure: None,
    },
    Offering {
        title: "Weekly Meetups",
        body: "Join regular sessions every Thursday at 6 PM",
        figure: Some((StatKind::Students, "Students")),
    },
];

pub const TEAM_SIZE: u32 = 6;

pub const CTF_TITLE: &str = "Current Competition";
pub const CTF_BLURB: &str = "Winter CTF 2025 is live! Solve challenges across multiple categories and climb the leaderboard.";
pub const CTF_FIGURES: [(&str, &str); 3] = [("47", "Participants"), ("15", "Challenges"), ("3d", "Remaining")];
pub const LEADERBOARD_SIZE: u32 = 5;

/// Placeholder leaderboard score for `rank` (1-based).
pub fn leaderboard_points(rank: u32) -> i64 {
    1000 - rank as i64 * 150
}

#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

const fn link(name: &'static str, description: &'static str, url: &'static str) -> Link {
    Link {
        name,
        description,
        url,
    }
}

pub const SOCIAL_LINKS: [Link; 3] = [
    link("Discord", "Join our Discord", "https://discord.gg/9pduz6bhE3"),
    link(
        "Instagram",
        "Follow us on Instagram",
        "https://www.instagram.com/wicys.ualberta",
    ),
    link(
        "LinkedIn",
        "Connect on LinkedIn",
        "https://www.linkedin.com/company/wicys-university-of-alberta-student-chapter",
    ),
];

#[derive(Debug, Clone, Copy)]
pub struct ResourceGroup {
    pub title: &'static str,
    pub links: &'static [Link],
}

pub const RESOURCE_GROUPS: [ResourceGroup; 8] = [
    ResourceGroup {
        title: "Virtual Machines (VMs)",
        links: &[
            link("Kali Linux", "Pre-loaded with 600+ security tools for ethical hacking and penetration testing.", "https://www.kali.org/"),
            link("VulnHub", "Download vulnerable VMs to practice real-world exploitation in a sandboxed environment.", "https://www.vulnhub.com/"),
            link("Exploit.Education", "VMs designed to teach a variety of computer security issues from basics to advanced.", "https://exploit.education/"),
        ],
    },
    ResourceGroup {
        title: "Penetration Testing Tools",
        links: &[
            link("Nmap", "Network scanner for discovering hosts, open ports, services, and vulnerabilities.", "https://nmap.org/"),
            link("Metasploit", "Exploit framework with a vast library for developing and executing attacks.", "https://www.metasploit.com/"),
            link("Burp Suite", "Web application security testing tool for finding vulnerabilities in web apps.", "https://portswigger.net/burp"),
            link("Wireshark", "Network protocol analyzer for capturing and inspecting packet-level traffic.", "https://www.wireshark.org/"),
            link("Ghidra", "Reverse engineering tool by the NSA for analyzing binary files and malware.", "https://ghidra-sre.org/"),
            link("Pwntools", "CTF framework for writing exploits and working with binary exploitation.", "https://github.com/Gallopsled/pwntools"),
        ],
    },
    ResourceGroup {
        title: "CTF Practice Platforms",
        links: &[
            link("PicoCTF", "Beginner-friendly CTF hosted by Carnegie Mellon. The largest CTF in the world.", "https://picoctf.org/"),
            link("HackTheBox", "Realistic penetration testing labs with machines at various difficulty levels.", "https://www.hackthebox.com/"),
            link("TryHackMe", "Structured learning paths and guided rooms for beginners to advanced players.", "https://tryhackme.com/"),
            link("CTFLearn", "Large collection of beginner-friendly challenges across cryptography, web, and binary.", "https://ctflearn.com/"),
            link("OverTheWire", "Classic wargames and challenges including the famous Bandit series for Linux.", "https://overthewire.org/"),
            link("RootMe", "Hacking and InfoSec learning platform with challenges and virtual labs.", "https://www.root-me.org/"),
        ],
    },
    ResourceGroup {
        title: "Cybersecurity Learning Platforms",
        links: &[
            link("Network Academy", "Cisco-created courses covering various areas of information security.", "https://skillsforall.cisco.com/"),
            link("Pwn College", "Comprehensive course for binary exploitation starting from basics to advanced.", "https://pwn.college/"),
            link("PortSwigger Labs", "Hands-on labs for learning web vulnerabilities and security testing.", "https://portswigger.net/web-security"),
            link("CryptoHack", "Interactive platform for learning cryptography through hands-on challenges.", "https://cryptohack.org/"),
        ],
    },
    ResourceGroup {
        title: "Guides & References",
        links: &[
            link("CTF101", "Wiki and guidebook serving as a great introduction to CTF categories.", "https://ctf101.org/"),
            link("CTF Wiki", "Another comprehensive wiki with helpful CTF information and techniques.", "https://ctf-wiki.mahaloz.re/"),
            link("CTF Field Guide", "Useful guides covering basic skills needed for CTF competitions.", "https://trailofbits.github.io/ctf/"),
            link("AwesomeCTF", "Long list of resources, guides, and CTFs for practice across all topics.", "https://github.com/apsdehal/awesome-ctf"),
            link("LiveOverflow", "YouTube channel and website devoted to hacking, penetration testing, and CTFs.", "https://liveoverflow.com/"),
            link("CTFTime Resources", "Community-maintained guides with comprehensive information on CTF topics.", "https://ctftime.org/"),
        ],
    },
    ResourceGroup {
        title: "YouTube Channels",
        links: &[
            link("LiveOverflow", "In-depth tutorials on hacking, exploitation, and CTF walkthroughs.", "https://www.youtube.com/@LiveOverflow"),
            link("John Hammond", "Beginner-friendly guides explaining CTF concepts step-by-step clearly.", "https://www.youtube.com/@_JohnHammond"),
            link("IppSec", "Detailed video tutorials and walkthroughs of HackTheBox and other platforms.", "https://www.youtube.com/@IppSec"),
            link("Network Chuck", "Focus on networking and security fundamentals in information security field.", "https://www.youtube.com/@NetworkChuck"),
        ],
    },
    ResourceGroup {
        title: "CTF Tracking & Communities",
        links: &[
            link("CTFTime", "Track upcoming CTFs, create a team profile, and access an archive of past CTF writeups.", "https://ctftime.org/"),
            link("Major League Cyber", "Platform for creating a profile and tracking your progress in CTF competitions.", "https://majorleaguecyber.org/"),
            link("WeChall", "Another tracking site for monitoring your CTF progress and rankings.", "https://www.wechall.net/"),
        ],
    },
    ResourceGroup {
        title: "Specialized Topics",
        links: &[
            link("Cryptopals", "Hands-on cryptography challenges and exercises for learning crypto basics.", "https://cryptopals.com/"),
            link("Nightmare", "In-depth guide covering binary exploitation and pwning with CTF examples.", "https://github.com/guyinatuxedo/nightmare"),
            link("CyberChef", "Web app for encryption, encoding, decoding, and data analysis on the fly.", "https://gchq.github.io/CyberChef/"),
            link("Ciphey", "Tool that automatically decrypts data and decodes encodings without knowing the key.", "https://github.com/Ciphey/Ciphey"),
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct MembershipTier {
    pub name: &'static str,
    pub audience: &'static str,
}

pub const MEMBERSHIP_TIERS: [MembershipTier; 2] = [
    MembershipTier {
        name: "General Member",
        audience: "For University of Alberta students passionate about cybersecurity",
    },
    MembershipTier {
        name: "Affiliate Member",
        audience: "For alumni, faculty, and non-affiliated cybersecurity students and professionals",
    },
];

pub const MEMBERSHIP_BLURB: &str = "Ready to become part of the WiCyS UAlberta community? Whether you're a current student, alumni, faculty member, or cybersecurity enthusiast, we have a membership option for you.";
