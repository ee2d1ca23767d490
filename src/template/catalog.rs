//! The fixed, ordered list of files a scaffolded project is made of.
//!
//! Bodies are embedded verbatim; `requires_fields` is computed here, once,
//! by scanning each body for the placeholder pattern.

use std::path::PathBuf;

use super::{Placement, TemplateEntry};

const SETUP_CFG: &str = r#"
[metadata]
version = 0.0.1
name = {package_name}
author = {author}
author_email = {author_email}
description = {description}
long_description = file: README.md
long_description_content_type = text/markdown
url = {home_page_url}
project_urls =
    Bug Tracker = {bug_tracker_url}
classifiers =
    Programming Language :: Python :: 3
    Operating System :: OS Independent
license = MIT
keywords = {keywords}


[options]
package_dir =
    = src
packages = find:
python_requires = {python_requires}
install_requires =

[options.packages.find]
where = src


[options.entry_points]
console_scripts =
    {adapted_package_name} = {adapted_package_name}.cli:main
"#;

const VERSION: &str = "0.0.1";

const PYPROJECT_TOML: &str = r#"
[build-system]
requires = [
    "setuptools",
    "wheel"
]
build-backend = "setuptools.build_meta"
"#;

const BUILD: &str = r##"
#!/usr/bin/env bash

SCRIPT_DIR=$(realpath "$(dirname "${{0}}")")
VENV_DIR=${{SCRIPT_DIR}}/.venv-build
POSITIONAL=()


usage() {{
cat << EOF
Build and push library to pypi index.

Usage:
    ${{0}} [OPTIONS] [EXTRA_ARGS]

All the EXTRA_ARGS are passed to twine.
Credentials are in ~/.pypirc.

Options:
    --push      Push to pypi
    --test      Use test pypi
    --debug     Set bash 'x' option
    --help      Shows help message
EOF
}}

while [ "${{#}}" -gt 0 ]; do
    case "${{1}}" in
        -h|--help)
            usage
            exit
            ;;

        --test)
            USE_TEST_PYPI=1
            ;;

        --push)
            PUSH=1
            ;;

        --debug)
            set -x
            ;;

        *)
            POSITIONAL+=("${{1}}")
            ;;
    esac

   shift
done

set -eu

VERSION="$(cat ${{SCRIPT_DIR}}/VERSION)"
sed -E -i "s/version = [0-9]+\.[0-9]+\.[0-9]+/version = ${{VERSION}}/g" "${{SCRIPT_DIR}}/setup.cfg"
sed -E -i "s/__version__ = '[0-9]+\.[0-9]+\.[0-9]+'/__version__ = '${{VERSION}}'/g" "${{SCRIPT_DIR}}/src/{adapted_package_name}/__init__.py"

if [ -d "${{VENV_DIR}}" ]; then
    source "${{VENV_DIR}}/bin/activate"
else
    python3 -m venv "${{VENV_DIR}}" && \
    source "${{VENV_DIR}}/bin/activate" && \
    pip3 install build==0.10.0 twine==3.7.1
fi

rm -rf "${{SCRIPT_DIR}}/dist"
cd "${{SCRIPT_DIR}}"
python -m build

if [ -z "${{PUSH+x}}" ]; then
    exit 0
fi

if [ -n "${{USE_TEST_PYPI+x}}" ]; then
    echo -e "\033[0;33mUsing test repository\033[0m"
    twine upload --repository testpypi "${{SCRIPT_DIR}}/dist/*" "${{POSITIONAL[@]}}"
else
    echo -e "\033[0;33mUsing production repository\033[0m"
    twine upload "${{SCRIPT_DIR}}/dist/*" "${{POSITIONAL[@]}}"
fi
"##;

const LICENSE: &str = r#"
Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
"#;

const README_MD: &str = r#"
# {package_name}


```
pip install {adapted_package_name}
```
"#;

const GITIGNORE: &str = r#"
# Byte-compiled / optimized / DLL files
__pycache__/
*.py[cod]
*$py.class

# C extensions
*.so

# Distribution / packaging
.Python
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
pip-wheel-metadata/
share/python-wheels/
*.egg-info/
.installed.cfg
*.egg
MANIFEST

# PyInstaller
#  Usually these files are written by a python script from a template
#  before PyInstaller builds the exe, so as to inject date/other infos into it.
*.manifest
*.spec

# Installer logs
pip-log.txt
pip-delete-this-directory.txt

# Unit test / coverage reports
htmlcov/
.tox/
.nox/
.coverage
.coverage.*
.cache
nosetests.xml
coverage.xml
*.cover
*.py,cover
.hypothesis/
.pytest_cache/

# Translations
*.mo
*.pot

# Django stuff:
*.log
local_settings.py
db.sqlite3
db.sqlite3-journal

# Flask stuff:
instance/
.webassets-cache

# Scrapy stuff:
.scrapy

# Sphinx documentation
docs/_build/

# PyBuilder
target/

# Jupyter Notebook
.ipynb_checkpoints

# IPython
profile_default/
ipython_config.py

# pyenv
.python-version

# pipenv
#   According to pypa/pipenv#598, it is recommended to include Pipfile.lock in version control.
#   However, in case of collaboration, if having platform-specific dependencies or dependencies
#   having no cross-platform support, pipenv may install dependencies that don't work, or not
#   install all needed dependencies.
#Pipfile.lock

# PEP 582; used by e.g. github.com/David-OConnor/pyflow
__pypackages__/

# Celery stuff
celerybeat-schedule
celerybeat.pid

# SageMath parsed files
*.sage.py

# Environments
.env
.venv
.venv-build
env/
venv/
ENV/
env.bak/
venv.bak/

# Spyder project settings
.spyderproject
.spyproject

# Rope project settings
.ropeproject

# mkdocs documentation
/site

# mypy
.mypy_cache/
.dmypy.json
dmypy.json

# Pyre type checker
.pyre/

.vscode
*~
.temp
examples
__pycache__
backup
.*
"#;

const ENV_FILE: &str = "
PYTHONPATH=./src
";

const REQUIREMENTS_TXT: &str = "\n";

const CLI_PY: &str = r#"
# from {adapted_package_name}.whatever import Whatever

from argparse import ArgumentParser, RawDescriptionHelpFormatter
import sys


def cli(args=sys.argv[1:]):
    parser = ArgumentParser(description='{adapted_package_name} description goes here')
    parser.add_argument('--change-me', default='An option sample', required=False,
        help='Just an option sample of your cli to be substituted by real ones')

    return parser.parse_args(args)


def main():
    args = cli()
    print('Package {package_name} scaffolded with pypiforge')


if __name__ == '__main__':
    main()
"#;

const MAIN_PY: &str = r#"
from {adapted_package_name}.cli import main


if __name__ == '__main__':
    main()
"#;

const INIT_PY: &str = r#"
__version__ = '0.0.1'
"#;

const PYPIRC: &str = r#"
[pypi]
  username = __token__
  password = {pypi_token}

[testpypi]
  username = __token__
  password = {testpypi_token}
"#;

/// Build the catalog. Order is fixed so runs are reproducible; no entry's
/// rendering depends on another's side effect.
pub fn catalog() -> Vec<TemplateEntry> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));

    vec![
        TemplateEntry::new("setup.cfg", SETUP_CFG, Placement::ProjectRoot),
        TemplateEntry::new("VERSION", VERSION, Placement::ProjectRoot),
        TemplateEntry::new("pyproject.toml", PYPROJECT_TOML, Placement::ProjectRoot),
        TemplateEntry::new("build", BUILD, Placement::ProjectRoot).executable(),
        TemplateEntry::new("LICENSE", LICENSE, Placement::ProjectRoot),
        TemplateEntry::new("README.md", README_MD, Placement::ProjectRoot),
        TemplateEntry::new(".gitignore", GITIGNORE, Placement::ProjectRoot),
        TemplateEntry::new(".env", ENV_FILE, Placement::ProjectRoot),
        TemplateEntry::new("requirements.txt", REQUIREMENTS_TXT, Placement::ProjectRoot),
        TemplateEntry::new("cli.py", CLI_PY, Placement::SourceRoot),
        TemplateEntry::new("__main__.py", MAIN_PY, Placement::SourceRoot),
        TemplateEntry::new("__init__.py", INIT_PY, Placement::SourceRoot),
        TemplateEntry::new(".pypirc", PYPIRC, Placement::External(home)).preserve_existing(),
    ]
}
