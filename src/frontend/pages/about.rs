use leptos::prelude::*;

use crate::frontend::components::{
    Button, ButtonSize, ButtonVariant, FeatureCard, Footer, Nav, TestimonialCard,
};

struct TeamMember {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
}

impl TeamMember {
    fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

const TEAM: [TeamMember; 6] = [
    TeamMember {
        name: "Alex Rivera",
        role: "Founder & Lead Instructor",
        bio: "Former CS professor with a passion for making programming accessible to everyone through visual learning.",
    },
    TeamMember {
        name: "Priya Patel",
        role: "3D Visualization Expert",
        bio: "Combines her background in computer graphics and education to create intuitive visual models of complex concepts.",
    },
    TeamMember {
        name: "David Kim",
        role: "Curriculum Designer",
        bio: "Specializes in breaking down advanced topics into approachable, engaging learning experiences.",
    },
    TeamMember {
        name: "Elena Rodriguez",
        role: "Frontend Developer",
        bio: "Creates the interactive interfaces that bring our 3D learning experiences to life.",
    },
    TeamMember {
        name: "Michael Chen",
        role: "Education Technology Researcher",
        bio: "Studies the effectiveness of different teaching methods to continually improve our courses.",
    },
    TeamMember {
        name: "Sarah Johnson",
        role: "Student Success Manager",
        bio: "Ensures every student receives the support they need to succeed in their learning journey.",
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <Nav/>

            <section class="pt-32 pb-16 px-6 text-center">
                <span class="text-xs font-medium tracking-wider text-orange-400">"OUR MISSION"</span>
                <h1 class="text-4xl md:text-5xl font-bold mt-3 mb-6">"Revolutionizing Programming Education"</h1>
                <p class="text-lg text-slate-400 max-w-3xl mx-auto">
                    "We're on a mission to transform how programming is taught and learned through "
                    "interactive 3D visualizations and immersive learning experiences."
                </p>
            </section>

            <section class="py-16 px-6 bg-slate-900/30">
                <div class="max-w-3xl mx-auto space-y-4 text-slate-400 leading-relaxed">
                    <h2 class="text-3xl font-bold text-white mb-6">"Our Story"</h2>
                    <p>
                        "CodeCraft began with a simple question: why are programming concepts so often taught "
                        "through text alone, when they're inherently visual and interactive?"
                    </p>
                    <p>
                        "Founded in 2022 by a team of educators, developers, and 3D artists, we set out to create "
                        "a learning platform that uses 3D visualization to make programming more intuitive and engaging."
                    </p>
                    <p>
                        "Today our courses have helped thousands of students around the world turn abstract "
                        "programming concepts into tangible understanding."
                    </p>
                </div>
            </section>

            <section class="py-16 px-6">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-4">"Our Core Values"</h2>
                    <p class="text-slate-400 text-center mb-10">
                        "These principles guide everything we do at CodeCraft, from course design to student support."
                    </p>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                        <FeatureCard
                            icon="🚀"
                            title="Innovation"
                            desc="We constantly explore new ways to visualize and teach complex programming concepts."
                        />
                        <FeatureCard
                            icon="🌍"
                            title="Inclusivity"
                            desc="We design our courses to be accessible to learners of all backgrounds and learning styles."
                        />
                        <FeatureCard
                            icon="🏆"
                            title="Excellence"
                            desc="We maintain the highest standards in our course content, platform, and student support."
                        />
                        <FeatureCard
                            icon="📈"
                            title="Impact"
                            desc="We measure our success by the real-world skills and confidence our students gain."
                        />
                    </div>
                </div>
            </section>

            <section class="py-16 px-6 bg-slate-900/30">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-4">"Meet Our Team"</h2>
                    <p class="text-slate-400 text-center mb-10">
                        "The educators, developers, and designers behind CodeCraft."
                    </p>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {TEAM
                            .iter()
                            .map(|member| {
                                view! {
                                    <div class="p-6 rounded-xl bg-slate-900/50 border border-slate-800 text-center">
                                        <div class="w-16 h-16 mx-auto mb-4 rounded-full bg-gradient-to-br from-orange-500 to-amber-500
                                                    flex items-center justify-center text-2xl font-bold text-white">
                                            {member.initial().to_string()}
                                        </div>
                                        <h3 class="text-xl font-semibold text-white mb-1">{member.name}</h3>
                                        <p class="text-orange-400 text-sm mb-3">{member.role}</p>
                                        <p class="text-slate-400 text-sm">{member.bio}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-16 px-6">
                <div class="max-w-4xl mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-10">"What Our Students Say"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <TestimonialCard
                            quote="The 3D visualizations completely changed how I understand algorithms. Concepts I struggled with for years suddenly made perfect sense when I could see them in action."
                            name="Jamie Lewis"
                            role="Software Developer"
                        />
                        <TestimonialCard
                            quote="As a visual learner, traditional programming courses never clicked for me. CodeCraft's approach finally made programming accessible and even enjoyable."
                            name="Taylor Morgan"
                            role="UX Designer"
                        />
                    </div>
                </div>
            </section>

            <section class="py-20 px-6 bg-slate-900/30 text-center">
                <h2 class="text-3xl font-bold mb-6">"Ready to Transform How You Learn?"</h2>
                <p class="text-lg text-slate-400 mb-8 max-w-2xl mx-auto">
                    "Join thousands of students experiencing programming in a whole new dimension."
                </p>
                <div class="flex flex-wrap gap-4 justify-center">
                    <Button href="/courses" size=ButtonSize::Large>"Explore Courses"</Button>
                    <Button href="mailto:hello@codecraft.dev" variant=ButtonVariant::Ghost size=ButtonSize::Large>
                        "Contact Us"
                    </Button>
                </div>
            </section>

            <div class="flex-grow"></div>
            <Footer/>
        </div>
    }
}
