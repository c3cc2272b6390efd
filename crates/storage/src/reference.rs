//! Reference curriculum shipped with the page: nine courses of five steps,
//! course 3 fully labelled, and mission text for its first three steps.

use shared::domain::{mission_key, CourseId, CourseNode, StepId, StepNode, TabKey};

use crate::{MissionEntry, MissionTable};

pub const COURSE_COUNT: i64 = 9;
pub const STEP_COUNT: i64 = 5;

const COURSE_3_LABELS: [&str; 5] = [
    "1. 관리 로봇 깨우기",
    "2. 로봇 팔 제어하기",
    "3. 재료 상자 정제하기",
    "4. 자율 주행 시스템 구축하기",
    "5. 도시를 탈출하기",
];

pub fn default_step_label(position: usize) -> String {
    format!("단계 {position}")
}

pub fn tree() -> Vec<CourseNode> {
    (1..=COURSE_COUNT)
        .map(|id| {
            let steps = (1..=STEP_COUNT)
                .map(|step| {
                    let label = if id == 3 {
                        COURSE_3_LABELS[(step - 1) as usize].to_string()
                    } else {
                        default_step_label(step as usize)
                    };
                    StepNode {
                        id: StepId(step),
                        label,
                    }
                })
                .collect();
            CourseNode {
                id: CourseId(id),
                title: format!("과정 {id}"),
                completed: id <= 2,
                steps,
            }
        })
        .collect()
}

pub fn missions() -> MissionTable {
    let mut table = MissionTable::new();

    let mut wake_robot = MissionEntry::default();
    wake_robot.insert(
        TabKey::Task,
        lines(&[
            "1. 관리 로봇에 접속하기",
            "노트북을 사용해 관리 로봇에 접속하세요",
            "",
            "2. 암호 해제하기",
            "Hello, World!를 출력해 로봇의 보안 시스템을 해제하세요",
        ]),
    );
    wake_robot.insert(
        TabKey::Detail,
        lines(&[
            "1 우측 상단 \"코드 에디터\" 화면에 코드를 작성합니다.",
            "2 \"코드 실행\" 버튼을 누르고 \"결과\" 창에서 결과를 확인합니다.",
        ]),
    );
    wake_robot.insert(
        TabKey::Constraint,
        lines(&["1 외부 인터넷 접속 금지", "2 sudo 사용 금지"]),
    );
    wake_robot.insert(
        TabKey::Env,
        lines(&["1 Python 3.11", "2 Ubuntu 22.04", "3 VSCode + Remote SSH"]),
    );
    wake_robot.insert(
        TabKey::Skill,
        lines(&[
            "1 코드 에디터 사용 방법 숙지",
            "2 파이썬 코드 작성 및 코드 실행 방법 숙지",
        ]),
    );
    table.insert(mission_key(CourseId(3), StepId(1)), wake_robot);

    let mut robot_arm = MissionEntry::default();
    robot_arm.insert(
        TabKey::Task,
        lines(&[
            "1. RobotArm 클래스 작성",
            "속성: holding(현재 들고 있는 상자), log(동작 기록 리스트) 구현",
            "",
            "2. 핵심 메서드",
            "pick(box): 파란 상자만 집고 log에 \"pick <box>\" 기록",
            "place(location): 파란 상자를 지정 위치에 내려놓고 log에 \"place <box> at <location>\" 기록",
            "",
            "3. solution() 구현",
            "파란 상자를 집어 \"컨베이어 벨트\"에 내려놓고 log 반환",
        ]),
    );
    robot_arm.insert(
        TabKey::Detail,
        lines(&["1 박스 색 판별 규칙/예외 처리", "2 log 포맷 요구사항 및 검증 케이스"]),
    );
    robot_arm.insert(
        TabKey::Constraint,
        lines(&["1 전역 변수 사용 금지", "2 클래스 외부에서 log 직접 조작 금지"]),
    );
    robot_arm.insert(
        TabKey::Env,
        lines(&["1 Python 3.11", "2 pytest 로컬 테스트 스크립트 제공"]),
    );
    robot_arm.insert(
        TabKey::Skill,
        lines(&["1 OOP(클래스 설계)", "2 객체 탐지 및 행동 수행 과정 학습"]),
    );
    table.insert(mission_key(CourseId(3), StepId(2)), robot_arm);

    table.insert(
        mission_key(CourseId(3), StepId(3)),
        MissionEntry::from_lines(TabKey::Task, lines(&["추후 업데이트 됩니다."])),
    );

    table
}

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|line| line.to_string()).collect()
}
