//! Prompt templates for the fitness-coach endpoints.
//!
//! Each function takes already-validated user input and produces the
//! full prompt sent to the model. Template text is the product copy for
//! "MuscleMate Coach"; keep edits deliberate.

/// Free-form coaching chat.
pub fn coach_chat(user_message: &str) -> String {
    format!(
        "You are 'MuscleMate Coach', an AI Fitness Coach. \n\n\
         User message: {user_message}\n\n\
         Respond as a helpful, motivating fitness coach. Provide:\n\
         - Personalized advice based on the message\n\
         - Actionable fitness tips\n\
         - Motivational encouragement\n\
         - Keep responses friendly and under 100 words\n\n\
         If the user writes in Hindi, respond in Hindi. If in English, respond in English.\n\
         If mixed language (Hinglish), respond in Hinglish.\n\n\
         Be encouraging, knowledgeable, and helpful. Focus on fitness, nutrition, workouts, and motivation."
    )
}

/// Structured workout plan for a goal / time budget / fitness level.
pub fn workout_plan(goal: &str, time_minutes: &str, level: &str) -> String {
    format!(
        "Create a personalized workout plan for:\n\
         Goal: {goal}\n\
         Available time: {time_minutes} minutes\n\
         Fitness level: {level}\n\n\
         Provide:\n\
         1. Warm-up exercises (5 minutes)\n\
         2. Main workout (20-25 minutes)\n\
         3. Cool-down (5 minutes)\n\
         4. Tips for proper form\n\
         5. Modifications for different levels\n\n\
         Keep it practical and actionable. Format as a structured plan."
    )
}

/// Nutrition advice for a goal / dietary preference / meal time.
pub fn nutrition_advice(goal: &str, dietary_preference: &str, meal_time: &str) -> String {
    format!(
        "Provide personalized nutrition advice for:\n\
         Goal: {goal}\n\
         Dietary preference: {dietary_preference}\n\
         Meal time: {meal_time}\n\n\
         Include:\n\
         1. Meal suggestions\n\
         2. Nutritional benefits\n\
         3. Portion guidance\n\
         4. Timing tips\n\
         5. Healthy alternatives\n\n\
         Focus on Indian food options. Keep it practical and actionable."
    )
}
